use crate::config::Dataset;
use crate::domain::model::{ComparisonEntry, PriceEstimate, SavingsResult};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write as _;

/// Everything the calculators produced for one trip, ready for rendering.
/// Pure presentation: no arithmetic happens here, numbers are shown exactly
/// as the core returned them.
#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance_km: f64,
    pub mode: String,
    pub emission_kg: f64,
    pub comparison: Vec<ComparisonEntry>,
    pub savings_vs_car: Option<SavingsResult>,
    pub credits: f64,
    pub price: PriceEstimate,
}

impl TripReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self, dataset: &Dataset) -> String {
        let mut out = String::new();

        match (&self.origin, &self.destination) {
            (Some(origin), Some(destination)) => {
                let _ = writeln!(
                    out,
                    "Trip: {} → {} ({} km)",
                    origin, destination, self.distance_km
                );
            }
            _ => {
                let _ = writeln!(out, "Trip: {} km", self.distance_km);
            }
        }
        let _ = writeln!(
            out,
            "Mode: {} {}",
            dataset.mode_icon(&self.mode),
            dataset.mode_label(&self.mode)
        );
        let _ = writeln!(out, "Emission: {:.2} kg CO2", self.emission_kg);

        let _ = writeln!(out, "\nComparison across modes:");
        for entry in &self.comparison {
            let label = dataset.mode_label(&entry.mode);
            match entry.emission {
                Some(emission) => {
                    let _ = write!(out, "  {:<12} {:>8.2} kg", label, emission);
                    if let Some(pct) = entry.percentage_vs_car {
                        let _ = write!(out, "  ({:.2}% of car)", pct);
                    }
                    let _ = writeln!(out);
                }
                None => {
                    let _ = writeln!(out, "  {:<12}        — kg", label);
                }
            }
        }

        if let Some(savings) = &self.savings_vs_car {
            match savings.percentage {
                Some(pct) => {
                    let _ = writeln!(
                        out,
                        "\nSaved vs car: {:.2} kg ({:.2}%)",
                        savings.saved_kg, pct
                    );
                }
                None => {
                    let _ = writeln!(out, "\nSaved vs car: {:.2} kg", savings.saved_kg);
                }
            }
        }

        let _ = writeln!(out, "\nOffset: {:.4} carbon credits", self.credits);
        let _ = writeln!(
            out,
            "Estimated price: {:.2} – {:.2} (avg {:.2})",
            self.price.min, self.price.max, self.price.average
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ComparisonEntry, PriceEstimate, SavingsResult};

    fn report() -> TripReport {
        TripReport {
            origin: Some("São Paulo".to_string()),
            destination: Some("Rio de Janeiro".to_string()),
            distance_km: 430.0,
            mode: "car".to_string(),
            emission_kg: 51.6,
            comparison: vec![
                ComparisonEntry {
                    mode: "bicycle".to_string(),
                    emission: Some(0.0),
                    percentage_vs_car: Some(0.0),
                },
                ComparisonEntry {
                    mode: "car".to_string(),
                    emission: Some(51.6),
                    percentage_vs_car: Some(100.0),
                },
            ],
            savings_vs_car: Some(SavingsResult {
                saved_kg: 0.0,
                percentage: Some(0.0),
            }),
            credits: 0.0516,
            price: PriceEstimate {
                min: 2.58,
                max: 7.74,
                average: 5.16,
            },
        }
    }

    #[test]
    fn test_render_text_contains_core_figures() {
        let text = report().render_text(&Dataset::default());
        assert!(text.contains("São Paulo → Rio de Janeiro (430 km)"));
        assert!(text.contains("Emission: 51.60 kg CO2"));
        assert!(text.contains("0.0516 carbon credits"));
        assert!(text.contains("2.58 – 7.74 (avg 5.16)"));
    }

    #[test]
    fn test_json_report_shape() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "car");
        assert_eq!(value["emission_kg"], 51.6);
        assert_eq!(value["comparison"][0]["mode"], "bicycle");
        assert_eq!(value["price"]["average"], 5.16);
    }
}

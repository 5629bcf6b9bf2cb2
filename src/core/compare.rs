use std::cmp::Ordering;

use crate::core::emission::EmissionCalculator;
use crate::core::rounding::round2;
use crate::domain::model::{ComparisonEntry, EmissionFactor};

/// The mode identifier used as the baseline for percentages.
pub const BASELINE_MODE: &str = "car";

/// Ranks every transport mode in the factor table for a fixed distance.
#[derive(Debug, Clone, Copy)]
pub struct ModeComparator<'a> {
    factors: &'a [EmissionFactor],
}

impl<'a> ModeComparator<'a> {
    pub fn new(factors: &'a [EmissionFactor]) -> Self {
        Self { factors }
    }

    /// One entry per known mode, ascending by emission. Entries whose
    /// emission could not be computed sort after all valid entries, keeping
    /// factor-table order among themselves. `percentage_vs_car` is filled
    /// only when the car baseline exists and is positive.
    pub fn compare_all_modes(&self, distance_km: f64) -> Vec<ComparisonEntry> {
        let calc = EmissionCalculator::new(self.factors);
        let reference = calc
            .emission(distance_km, BASELINE_MODE)
            .ok()
            .filter(|e| e.is_finite() && *e > 0.0);

        let mut entries: Vec<ComparisonEntry> = self
            .factors
            .iter()
            .map(|f| {
                let emission = calc.emission(distance_km, &f.mode).ok();
                let percentage_vs_car = match (emission, reference) {
                    (Some(e), Some(r)) => Some(round2(e / r * 100.0)),
                    _ => None,
                };
                ComparisonEntry {
                    mode: f.mode.clone(),
                    emission,
                    percentage_vs_car,
                }
            })
            .collect();

        // Stable sort: ties and unranked entries keep factor-table order.
        entries.sort_by(|a, b| match (a.emission, b.emission) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        entries
    }
}

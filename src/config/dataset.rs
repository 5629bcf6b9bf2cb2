use crate::domain::model::{CreditPolicy, EmissionFactor, ModeInfo, RouteRecord};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The immutable reference data every calculation runs against: route table,
/// emission factors, mode display metadata and the carbon-credit policy.
/// Built once at startup, from the embedded defaults or a TOML file, and
/// passed by reference into the calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    pub factors: Vec<EmissionFactor>,
    #[serde(default)]
    pub modes: HashMap<String, ModeInfo>,
    pub credit: CreditPolicy,
}

impl Dataset {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let dataset: Self = toml::from_str(content)?;
        Ok(dataset)
    }

    /// Display label for a mode id, falling back to the id itself when the
    /// dataset carries no metadata for it.
    pub fn mode_label<'a>(&'a self, mode: &'a str) -> &'a str {
        self.modes.get(mode).map_or(mode, |info| info.label.as_str())
    }

    pub fn mode_icon(&self, mode: &str) -> &str {
        self.modes.get(mode).map_or("", |info| info.icon.as_str())
    }

    fn validate_dataset(&self) -> Result<()> {
        if self.factors.is_empty() {
            return Err(crate::utils::error::EcotripError::MissingConfigError {
                field: "factors".to_string(),
            });
        }
        for (i, factor) in self.factors.iter().enumerate() {
            validation::validate_non_empty_string(&format!("factors[{}].mode", i), &factor.mode)?;
            validation::validate_finite_non_negative(
                &format!("factors[{}].kg_per_km", i),
                factor.kg_per_km,
            )?;
        }
        for (i, route) in self.routes.iter().enumerate() {
            validation::validate_non_empty_string(&format!("routes[{}].origin", i), &route.origin)?;
            validation::validate_non_empty_string(
                &format!("routes[{}].destination", i),
                &route.destination,
            )?;
            validation::validate_finite_non_negative(
                &format!("routes[{}].distance_km", i),
                route.distance_km,
            )?;
        }
        validation::validate_positive_number("credit.kg_per_credit", self.credit.kg_per_credit)?;
        validation::validate_finite_non_negative(
            "credit.price_min_per_credit",
            self.credit.price_min_per_credit,
        )?;
        validation::validate_finite_non_negative(
            "credit.price_max_per_credit",
            self.credit.price_max_per_credit,
        )?;
        validation::validate_ordered_pair(
            "credit.price_per_credit",
            self.credit.price_min_per_credit,
            self.credit.price_max_per_credit,
        )?;
        Ok(())
    }
}

impl Validate for Dataset {
    fn validate(&self) -> Result<()> {
        self.validate_dataset()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            factors: default_factors(),
            modes: default_modes(),
            credit: CreditPolicy {
                kg_per_credit: 1000.0,
                price_min_per_credit: 50.0,
                price_max_per_credit: 150.0,
            },
        }
    }
}

fn route(origin: &str, destination: &str, distance_km: f64) -> RouteRecord {
    RouteRecord {
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance_km,
    }
}

fn default_routes() -> Vec<RouteRecord> {
    vec![
        route("São Paulo", "Rio de Janeiro", 430.0),
        route("São Paulo", "Belo Horizonte", 586.0),
        route("Rio de Janeiro", "Belo Horizonte", 434.0),
        route("São Paulo", "Curitiba", 408.0),
        route("Curitiba", "Florianópolis", 300.0),
        route("Florianópolis", "Porto Alegre", 476.0),
        route("São Paulo", "Brasília", 1015.0),
        route("Rio de Janeiro", "Brasília", 1148.0),
        route("Belo Horizonte", "Brasília", 716.0),
        route("São Paulo", "Salvador", 1962.0),
        route("Rio de Janeiro", "Vitória", 521.0),
        route("São Paulo", "Campinas", 99.0),
    ]
}

fn default_factors() -> Vec<EmissionFactor> {
    let factors = [
        ("car", 0.12),
        ("motorcycle", 0.09),
        ("bus", 0.089),
        ("train", 0.041),
        ("plane", 0.255),
        ("bicycle", 0.0),
    ];
    factors
        .iter()
        .map(|(mode, kg_per_km)| EmissionFactor {
            mode: (*mode).to_string(),
            kg_per_km: *kg_per_km,
        })
        .collect()
}

fn default_modes() -> HashMap<String, ModeInfo> {
    let modes = [
        ("car", "Car", "🚗", "#e74c3c"),
        ("motorcycle", "Motorcycle", "🏍️", "#e67e22"),
        ("bus", "Bus", "🚌", "#f1c40f"),
        ("train", "Train", "🚆", "#3498db"),
        ("plane", "Plane", "✈️", "#9b59b6"),
        ("bicycle", "Bicycle", "🚲", "#2ecc71"),
    ];
    modes
        .iter()
        .map(|(mode, label, icon, color)| {
            (
                (*mode).to_string(),
                ModeInfo {
                    label: (*label).to_string(),
                    icon: (*icon).to_string(),
                    color: (*color).to_string(),
                },
            )
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// A known city pair with its road distance. The route table may contain
/// duplicate pairs; lookups return the first match in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

/// Per-kilometer CO2 emission factor for one transport mode. Kept as an
/// ordered sequence, not a map: comparator output is stable in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub mode: String,
    pub kg_per_km: f64,
}

/// Display attributes for a transport mode. Consumed by presentation only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub label: String,
    pub icon: String,
    pub color: String,
}

/// Conversion and pricing parameters for carbon credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPolicy {
    pub kg_per_credit: f64,
    pub price_min_per_credit: f64,
    pub price_max_per_credit: f64,
}

/// One row of a mode comparison. `emission` is `None` when the emission
/// could not be computed for this mode; `percentage_vs_car` is `None`
/// whenever no positive car baseline exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub mode: String,
    pub emission: Option<f64>,
    pub percentage_vs_car: Option<f64>,
}

/// Emission saved relative to a baseline. `saved_kg` may be negative when
/// the chosen mode emits more than the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub saved_kg: f64,
    pub percentage: Option<f64>,
}

/// Price range for a credit quantity. `average` is the midpoint of the
/// already-rounded `min` and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

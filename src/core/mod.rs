pub mod compare;
pub mod credits;
pub mod distance;
pub mod emission;
pub mod rounding;

pub use crate::domain::model::{
    ComparisonEntry, CreditPolicy, EmissionFactor, PriceEstimate, RouteRecord, SavingsResult,
};
pub use crate::utils::error::{CalcError, Result};

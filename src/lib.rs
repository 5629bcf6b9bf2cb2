pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::TripReport;
pub use config::Dataset;
pub use core::compare::ModeComparator;
pub use core::credits::{savings, CreditCalculator};
pub use core::distance::RouteTable;
pub use core::emission::EmissionCalculator;
pub use utils::error::{CalcError, EcotripError, Result};

pub mod dataset;

pub use dataset::Dataset;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ecotrip")]
#[command(about = "Trip emission and carbon-credit offset calculator")]
pub struct CliConfig {
    /// Trip origin; looked up in the route table together with --destination
    #[arg(long)]
    pub origin: Option<String>,

    /// Trip destination
    #[arg(long)]
    pub destination: Option<String>,

    /// Trip distance in km; overrides the route-table lookup
    #[arg(long)]
    pub distance_km: Option<f64>,

    /// Transport mode to estimate
    #[arg(long, default_value = "car")]
    pub mode: String,

    /// Dataset TOML file; embedded defaults are used when omitted
    #[arg(long)]
    pub dataset: Option<String>,

    /// Print the known locations and exit
    #[arg(long)]
    pub list_locations: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

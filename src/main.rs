use clap::Parser;
use ecotrip::core::compare::BASELINE_MODE;
use ecotrip::utils::error::ErrorSeverity;
use ecotrip::utils::{logger, validation::Validate};
use ecotrip::{
    CliConfig, CreditCalculator, Dataset, EcotripError, EmissionCalculator, ModeComparator,
    RouteTable, TripReport,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ecotrip CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> ecotrip::Result<()> {
    let dataset = match &config.dataset {
        Some(path) => Dataset::from_file(path)?,
        None => Dataset::default(),
    };
    dataset.validate()?;

    let routes = RouteTable::new(&dataset.routes);

    if config.list_locations {
        for name in routes.known_locations() {
            println!("{}", name);
        }
        return Ok(());
    }

    let distance_km = match config.distance_km {
        Some(distance) => distance,
        None => {
            let origin = config
                .origin
                .as_deref()
                .ok_or_else(|| EcotripError::MissingConfigError {
                    field: "--origin (or --distance-km)".to_string(),
                })?;
            let destination =
                config
                    .destination
                    .as_deref()
                    .ok_or_else(|| EcotripError::MissingConfigError {
                        field: "--destination (or --distance-km)".to_string(),
                    })?;
            routes
                .resolve(origin, destination)
                .ok_or_else(|| EcotripError::RouteNotFoundError {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                })?
        }
    };
    tracing::debug!("Using distance of {} km", distance_km);

    let calculator = EmissionCalculator::new(&dataset.factors);
    let emission_kg = calculator.emission(distance_km, &config.mode)?;

    let comparison = ModeComparator::new(&dataset.factors).compare_all_modes(distance_km);

    let savings_vs_car = match calculator.emission(distance_km, BASELINE_MODE).ok() {
        Some(baseline) => Some(ecotrip::savings(emission_kg, baseline)?),
        None => None,
    };

    let credit_calculator = CreditCalculator::new(&dataset.credit);
    let credits = credit_calculator.credits(emission_kg)?;
    let price = credit_calculator.estimate_price(credits)?;

    let report = TripReport {
        origin: config.origin.clone(),
        destination: config.destination.clone(),
        distance_km,
        mode: config.mode.clone(),
        emission_kg,
        comparison,
        savings_vs_car,
        credits,
        price,
    };

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text(&dataset));
    }

    tracing::info!("✅ Calculation completed");
    Ok(())
}

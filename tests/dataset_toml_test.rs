use ecotrip::utils::validation::Validate;
use ecotrip::{CreditCalculator, Dataset, EmissionCalculator, RouteTable};
use std::io::Write;
use tempfile::NamedTempFile;

const CUSTOM_DATASET: &str = r##"
[[routes]]
origin = "Lisboa"
destination = "Porto"
distance_km = 313.0

[[routes]]
origin = "Lisboa"
destination = "Faro"
distance_km = 278.0

[[factors]]
mode = "car"
kg_per_km = 0.15

[[factors]]
mode = "bicycle"
kg_per_km = 0.0

[modes.car]
label = "Car"
icon = "🚗"
color = "#c0392b"

[credit]
kg_per_credit = 500.0
price_min_per_credit = 40.0
price_max_per_credit = 90.0
"##;

#[test]
fn test_custom_dataset_drives_the_calculators() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(CUSTOM_DATASET.as_bytes()).unwrap();

    let dataset = Dataset::from_file(temp_file.path()).unwrap();
    dataset.validate().unwrap();

    let routes = RouteTable::new(&dataset.routes);
    assert_eq!(routes.resolve("porto", "LISBOA"), Some(313.0));
    assert_eq!(routes.resolve("Porto", "Faro"), None);

    let calculator = EmissionCalculator::new(&dataset.factors);
    assert_eq!(calculator.emission(313.0, "car").unwrap(), 46.95);

    let credit_calculator = CreditCalculator::new(&dataset.credit);
    assert_eq!(credit_calculator.credits(46.95).unwrap(), 0.0939);
}

#[test]
fn test_malformed_toml_is_rejected() {
    assert!(Dataset::from_toml_str("[[routes]]\norigin = ").is_err());
}

#[test]
fn test_dataset_missing_credit_section_is_rejected() {
    let without_credit = r#"
[[factors]]
mode = "car"
kg_per_km = 0.12
"#;
    assert!(Dataset::from_toml_str(without_credit).is_err());
}

#[test]
fn test_validation_rejects_inverted_price_range_from_file() {
    let inverted = r#"
[[factors]]
mode = "car"
kg_per_km = 0.12

[credit]
kg_per_credit = 1000.0
price_min_per_credit = 150.0
price_max_per_credit = 50.0
"#;
    let dataset = Dataset::from_toml_str(inverted).unwrap();
    assert!(dataset.validate().is_err());
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let result = Dataset::from_file("/nonexistent/ecotrip-dataset.toml");
    assert!(result.is_err());
}

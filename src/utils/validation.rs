use crate::utils::error::{EcotripError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EcotripError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EcotripError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EcotripError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ordered_pair(field_name: &str, low: f64, high: f64) -> Result<()> {
    if low > high {
        return Err(EcotripError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("origin", "São Paulo").is_ok());
        assert!(validate_non_empty_string("origin", "").is_err());
        assert!(validate_non_empty_string("origin", "   ").is_err());
    }

    #[test]
    fn test_validate_finite_non_negative() {
        assert!(validate_finite_non_negative("distance_km", 0.0).is_ok());
        assert!(validate_finite_non_negative("distance_km", 430.0).is_ok());
        assert!(validate_finite_non_negative("distance_km", -1.0).is_err());
        assert!(validate_finite_non_negative("distance_km", f64::NAN).is_err());
        assert!(validate_finite_non_negative("distance_km", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("kg_per_credit", 1000.0).is_ok());
        assert!(validate_positive_number("kg_per_credit", 0.0).is_err());
    }

    #[test]
    fn test_validate_ordered_pair() {
        assert!(validate_ordered_pair("credit.price", 50.0, 150.0).is_ok());
        assert!(validate_ordered_pair("credit.price", 150.0, 50.0).is_err());
        assert!(validate_ordered_pair("credit.price", 50.0, 50.0).is_ok());
    }
}

use thiserror::Error;

/// Out-of-domain input to one of the pure calculators. Every variant is
/// recoverable: callers re-prompt or fall back to manual input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("unknown transport mode: {mode}")]
    UnknownMode { mode: String },

    #[error("distance must be a finite non-negative number, got {value}")]
    InvalidDistance { value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum EcotripError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Calculation error: {0}")]
    CalcError(#[from] CalcError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Route not found between '{origin}' and '{destination}'")]
    RouteNotFoundError { origin: String, destination: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EcotripError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::TomlError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::CalcError(_) | Self::RouteNotFoundError { .. } => ErrorCategory::Input,
            Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RouteNotFoundError { .. } => ErrorSeverity::Low,
            Self::CalcError(_) => ErrorSeverity::Medium,
            Self::TomlError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the dataset file exists and is readable".to_string(),
            Self::TomlError(_) => {
                "Check the dataset file against the expected TOML layout".to_string()
            }
            Self::SerializationError(_) => "Re-run without --json to see the text report".to_string(),
            Self::CalcError(CalcError::UnknownMode { .. }) => {
                "Use one of the modes listed in the dataset factor table".to_string()
            }
            Self::CalcError(_) => "Provide a finite, non-negative number".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the dataset file", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add the missing '{}' section to the dataset file", field)
            }
            Self::RouteNotFoundError { .. } => {
                "Pass --distance-km directly, or use --list-locations to see known cities"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RouteNotFoundError {
                origin,
                destination,
            } => format!("No known route between {} and {}", origin, destination),
            Self::CalcError(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EcotripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_is_low_severity() {
        let err = EcotripError::RouteNotFoundError {
            origin: "A".to_string(),
            destination: "B".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("No known route"));
    }

    #[test]
    fn test_calc_error_propagates_into_app_error() {
        let err: EcotripError = CalcError::UnknownMode {
            mode: "hovercraft".to_string(),
        }
        .into();
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("factor table"));
    }
}

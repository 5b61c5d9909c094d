use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Reference request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Reference data unavailable from {endpoint}: {message}")]
    ReferenceDataError { endpoint: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::HttpError(_) | QuoteError::ReferenceDataError { .. } => {
                ErrorCategory::Network
            }
            QuoteError::IoError(_) => ErrorCategory::Storage,
            QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuoteError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    /// Reference lookups only degrade a choice list, so they never fail a run.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::HttpError(_) | QuoteError::ReferenceDataError { .. } => {
                "Reference lists could not be loaded; the quotation can still be built".to_string()
            }
            QuoteError::IoError(e) => format!("Could not read or write a file: {}", e),
            QuoteError::SerializationError(e) => format!("The events file is not valid JSON: {}", e),
            QuoteError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            QuoteError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the reference endpoints or run with --offline",
            ErrorCategory::Storage => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Data => "Check the events file against the documented event format",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_errors_are_low_severity() {
        let err = QuoteError::ReferenceDataError {
            endpoint: "https://example.com/countries".to_string(),
            message: "status 500".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_config_errors_block_the_run() {
        let err = QuoteError::MissingConfigError {
            field: "output.path".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("output.path"));
    }
}

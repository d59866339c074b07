//! Error types for the salary estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, its reference data, and the lead store can report.

use thiserror::Error;

/// The main error type for the salary estimation engine.
///
/// The calculation itself only ever fails with [`EngineError::InvalidInput`];
/// the remaining variants belong to configuration loading and the lead store.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "region".to_string(),
///     message: "unknown region 'Mars'".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input field 'region': unknown region 'Mars'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input could not be resolved against the rate table.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// A lead record was missing a required field or contained bad data.
    #[error("Invalid lead field '{field}': {message}")]
    InvalidLead {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No lead exists for the given email.
    #[error("Lead not found: {email}")]
    LeadNotFound {
        /// The normalized email that was looked up.
        email: String,
    },

    /// A lead with the given email is already registered.
    #[error("Lead already exists: {email}")]
    LeadAlreadyExists {
        /// The normalized email that collided.
        email: String,
    },

    /// The backing lead store failed.
    #[error("Lead store error: {message}")]
    LeadStoreError {
        /// A description of the store failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::InvalidLead`].
    pub fn invalid_lead(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidLead {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rates.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rates.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("role", "unknown role 'Astronaut'");
        assert_eq!(
            error.to_string(),
            "Invalid input field 'role': unknown role 'Astronaut'"
        );
    }

    #[test]
    fn test_invalid_lead_displays_field_and_message() {
        let error = EngineError::invalid_lead("email", "must contain '@'");
        assert_eq!(
            error.to_string(),
            "Invalid lead field 'email': must contain '@'"
        );
    }

    #[test]
    fn test_lead_not_found_displays_email() {
        let error = EngineError::LeadNotFound {
            email: "jane@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "Lead not found: jane@example.com");
    }

    #[test]
    fn test_lead_already_exists_displays_email() {
        let error = EngineError::LeadAlreadyExists {
            email: "jane@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "Lead already exists: jane@example.com");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "band minimum is not representable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: band minimum is not representable"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::invalid_input("region", "unknown region 'Mars'"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

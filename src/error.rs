//! Error types for the payroll compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculation components never fail for malformed-but-plausible input
//! (incomplete attendance records, missing rate entries); errors here cover
//! configuration loading, pay-run aggregation misuse and status lifecycle
//! violations.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay run was submitted for aggregation with no payslips.
    #[error("Pay run '{run_id}' contains no payslips")]
    EmptyPayRun {
        /// The identifier of the empty pay run.
        run_id: String,
    },

    /// No pay event exists with the given identifier.
    #[error("Pay event not found: {id}")]
    EventNotFound {
        /// The event identifier that was not found.
        id: String,
    },

    /// A pay event that has already been submitted was asked to change.
    #[error("Pay event '{id}' has already been submitted")]
    EventAlreadySubmitted {
        /// The identifier of the submitted event.
        id: String,
    },

    /// A status transition was requested that the lifecycle does not allow.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_empty_pay_run_displays_run_id() {
        let error = EngineError::EmptyPayRun {
            run_id: "run_2025_14".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pay run 'run_2025_14' contains no payslips"
        );
    }

    #[test]
    fn test_event_not_found_displays_id() {
        let error = EngineError::EventNotFound {
            id: "run_001-20250701".to_string(),
        };
        assert_eq!(error.to_string(), "Pay event not found: run_001-20250701");
    }

    #[test]
    fn test_event_already_submitted_displays_id() {
        let error = EngineError::EventAlreadySubmitted {
            id: "run_001-20250701".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pay event 'run_001-20250701' has already been submitted"
        );
    }

    #[test]
    fn test_invalid_status_transition_displays_states() {
        let error = EngineError::InvalidStatusTransition {
            from: "Paid".to_string(),
            to: "Draft".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition from Paid to Draft"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

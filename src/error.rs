//! Error types for the Payroll Preview Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading snapshots,
//! configuration, and worked-time entries.

use thiserror::Error;

/// The main error type for the Payroll Preview Engine.
///
/// The calculation pipeline itself never fails; errors only arise at the
/// boundaries where snapshots, entries, and configuration enter the engine.
///
/// # Example
///
/// ```
/// use payroll_preview::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
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

    /// The employee snapshot could not be obtained or decoded.
    ///
    /// No calculator is built from a partial snapshot.
    #[error("Employee snapshot unavailable: {message}")]
    SnapshotUnavailable {
        /// A description of why the snapshot is unavailable.
        message: String,
    },

    /// The year-to-date summary could not be obtained or decoded.
    #[error("Year-to-date summary unavailable: {message}")]
    SummaryUnavailable {
        /// A description of why the summary is unavailable.
        message: String,
    },

    /// The employee snapshot was decoded but a required field is unusable.
    #[error("Invalid snapshot field '{field}': {message}")]
    InvalidSnapshot {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A worked-time entry contained a value outside its allowed range.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
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
    fn test_snapshot_unavailable_displays_message() {
        let error = EngineError::SnapshotUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee snapshot unavailable: connection refused"
        );
    }

    #[test]
    fn test_summary_unavailable_displays_message() {
        let error = EngineError::SummaryUnavailable {
            message: "Unauthorized".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Year-to-date summary unavailable: Unauthorized"
        );
    }

    #[test]
    fn test_invalid_snapshot_displays_field_and_message() {
        let error = EngineError::InvalidSnapshot {
            field: "salary_type".to_string(),
            message: "unknown salary type 'weekly'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid snapshot field 'salary_type': unknown salary type 'weekly'"
        );
    }

    #[test]
    fn test_invalid_entry_displays_field_and_message() {
        let error = EngineError::InvalidEntry {
            field: "overtime_hours".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry field 'overtime_hours': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unavailable() -> EngineResult<()> {
            Err(EngineError::SnapshotUnavailable {
                message: "timeout".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

//! Error types for the payroll engine.
//!
//! The contribution calculators are total functions and never fail. Errors
//! come from the layers around them: configuration loading and the
//! validation performed before a payroll run.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record was invalid.
    #[error("Invalid attendance record on {date}: {message}")]
    InvalidAttendance {
        /// The date of the offending record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The requested pay period does not exist.
    #[error("Invalid pay period {month}/{year}: {message}")]
    InvalidPayPeriod {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
        /// A description of the problem.
        message: String,
    },

    /// A numeric input was outside the range the engine accepts.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the accepted range.
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
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
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
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "basic_salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'basic_salary': must not be negative"
        );
    }

    #[test]
    fn test_invalid_attendance_displays_date_and_message() {
        let error = EngineError::InvalidAttendance {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            message: "clock-out is before clock-in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance record on 2025-03-04: clock-out is before clock-in"
        );
    }

    #[test]
    fn test_invalid_pay_period_displays_month_and_year() {
        let error = EngineError::InvalidPayPeriod {
            month: 13,
            year: 2025,
            message: "month must be between 1 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay period 13/2025: month must be between 1 and 12"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "days_worked".to_string(),
            message: "must not exceed 31".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'days_worked': must not exceed 31"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_employee() -> EngineResult<()> {
            Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_employee()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

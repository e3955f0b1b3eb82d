//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV ledger read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value typed by the user or stored on disk could not be parsed
    #[error("Could not parse {what}: '{input}'")]
    Parse { what: &'static str, input: String },

    /// Interactive input ended or could not be read
    #[error("Input error: {0}")]
    Input(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a parse error for an amount
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Parse {
            what: "amount",
            input: input.into(),
        }
    }

    /// Create a parse error for a category
    pub fn invalid_category(input: impl Into<String>) -> Self {
        Self::Parse {
            what: "category",
            input: input.into(),
        }
    }

    /// Create a parse error for a month key
    pub fn invalid_month(input: impl Into<String>) -> Self {
        Self::Parse {
            what: "month",
            input: input.into(),
        }
    }

    /// Create a parse error for a date
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::Parse {
            what: "date",
            input: input.into(),
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_parse_error() {
        let err = ExpenseError::invalid_amount("abc");
        assert_eq!(err.to_string(), "Could not parse amount: 'abc'");
        assert!(err.is_parse());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}

//! Custom error types for finviz
//!
//! Ledger operations never fail: lookup misses are `None` and form problems
//! are reported per field. This module covers the ambient failures around
//! them (configuration, terminal, command-line input).

use thiserror::Error;

/// The main error type for finviz operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input outside of the interactive forms
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal setup or rendering errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FinanceError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finviz operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("missing directory".into());
        assert_eq!(err.to_string(), "Configuration error: missing directory");
    }

    #[test]
    fn test_validation_error() {
        let err = FinanceError::Validation("budget must look like CATEGORY=AMOUNT".into());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: budget must look like CATEGORY=AMOUNT"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FinanceError = json_err.into();
        assert!(matches!(err, FinanceError::Json(_)));
    }
}

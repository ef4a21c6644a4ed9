//! Custom error types for receipt-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for receipt-cli operations
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Receipt image recognition failures
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ReceiptError {
    /// Create a recognition error from any failure along the OCR path
    pub fn recognition(detail: impl Into<String>) -> Self {
        Self::Recognition(detail.into())
    }

    /// Check if this is a recognition error
    pub fn is_recognition(&self) -> bool {
        matches!(self, Self::Recognition(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReceiptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for receipt-cli operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReceiptError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_recognition_error() {
        let err = ReceiptError::recognition("tesseract exited with status 1");
        assert_eq!(
            err.to_string(),
            "Recognition error: tesseract exited with status 1"
        );
        assert!(err.is_recognition());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let receipt_err: ReceiptError = io_err.into();
        assert!(matches!(receipt_err, ReceiptError::Io(_)));
    }
}

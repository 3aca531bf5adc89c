//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Layer name absent from the catalogue
    #[error("Layer not found: {0}")]
    NotFound(String),

    /// Operation not valid in the current playback state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Validation failed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}

//! Error types for the Contact Shape Auditor
//!
//! Fetch failures and parse failures are separate kinds so each
//! surfaces with its own classification at the audit boundary.

use thiserror::Error;

/// Errors raised while fetching the envelope
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure before a usable response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Response carried a non-success HTTP status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

/// Errors raised while parsing the envelope body
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(String),

    /// Body is valid JSON but does not fit the envelope shape
    #[error("Unexpected envelope shape: {0}")]
    Shape(String),
}

/// Main error type for audit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// Envelope fetch failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Envelope body could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    File(String),

    /// Serialization error while rendering results
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AuditError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AuditError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file(msg: impl Into<String>) -> Self {
        AuditError::File(msg.into())
    }
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::File(err.to_string())
    }
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

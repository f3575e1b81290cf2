//! Error types for pr-report.

use thiserror::Error;

/// Main error type for pr-report operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(String),

    /// Missing or rejected credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// API returned a non-success status
    #[error("API error: status code {status}, body: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Date is not in `YYYY-MM-DD` format
    #[error("invalid date format, use YYYY-MM-DD: {0}")]
    InvalidDate(String),

    /// A required request parameter is missing or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Map an upstream HTTP status and body to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Error::Unauthorized(message),
            _ => Error::Api { status, message },
        }
    }
}

/// Result type alias for pr-report operations.
pub type Result<T> = std::result::Result<T, Error>;

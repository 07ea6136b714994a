//! Error types for ledgerdesk
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! The taxonomy is deliberately flat: field-level validation errors render
//! inline next to their control, operation errors (rejected data-source
//! futures) surface as a banner string or a log line and are never re-thrown
//! to the host application.

use snafu::Snafu;

/// Main error type for the component kit
#[derive(Debug, Snafu)]
pub enum Error {
    /// Synchronous, field-level validation failure
    #[snafu(display("Validation failed for {field}: {message}"))]
    Validation { field: String, message: String },

    /// A data-source operation was rejected by the host
    #[snafu(display("Operation failed: {message}"))]
    Operation { message: String },

    /// IO error (preference files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl Error {
    /// Build an operation error from any displayable rejection
    pub fn operation(message: impl Into<String>) -> Self {
        Error::Operation {
            message: message.into(),
        }
    }

    /// Build a field-level validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

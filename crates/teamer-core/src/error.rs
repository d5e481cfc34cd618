//! Centralized error types for the status site.

use thiserror::Error;

/// Main error type for TeamerHQ operations.
#[derive(Error, Debug)]
pub enum TeamerError {
    #[error("Incident not found: {0}")]
    IncidentNotFound(String),

    #[error("Unknown {kind} status: '{value}'")]
    UnknownStatus { kind: &'static str, value: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for TeamerHQ operations.
pub type TeamerResult<T> = Result<T, TeamerError>;

impl TeamerError {
    /// Create an unknown status error.
    pub fn unknown_status(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            kind,
            value: value.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// Only construction can fail: loading resource tables and validating
/// configuration. Scoring itself is total and never returns an error.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Represents standard input/output errors (reading a resource file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed resource JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents declarative validation failures on config or resources.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents resource table entries that cannot be used for scoring.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl From<validator::ValidationErrors> for SentimentError {
    fn from(err: validator::ValidationErrors) -> Self {
        SentimentError::Validation(format!("Validation errors: {}", err))
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SentimentError>;

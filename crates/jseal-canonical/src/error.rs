//! Error types for jseal Canonical

use thiserror::Error;

/// Errors that can occur during canonicalization or digest computation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("Unknown digest algorithm: '{0}'")]
    UnknownAlgorithm(String),

    #[error("Top-level value is not a JSON object")]
    NotAnObject,

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}

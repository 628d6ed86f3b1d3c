//! Error types for jseal Core

use jseal_canonical::CanonicalError;
use thiserror::Error;

/// Errors raised by signing and verification
///
/// Every variant is terminal for the call that raised it: inputs are
/// deterministic and local, so there is nothing transient to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignError {
    /// Input text is not valid JSON, or its top level is not an object
    #[error("Malformed JSON input: {0}")]
    MalformedInput(String),

    /// The reserved field already exists on the document being signed
    #[error("Field '{0}' already exists within this JSON")]
    SignatureCollision(String),

    /// Verification was attempted with neither an embedded signature field
    /// nor a detached signature
    #[error("The provided JSON is not signed")]
    MissingSignature,

    /// The configured digest algorithm is unknown
    #[error("Configuration error: {0}")]
    Configuration(#[from] CanonicalError),
}

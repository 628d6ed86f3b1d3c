//! Signing strategies
//!
//! Two packaging strategies share one canonicalization rule: the signature
//! field is stripped, top-level keys are sorted ascending by UTF-8 bytes,
//! and the keyed digest is computed over the compact serialization. They
//! differ only in how the signed artifact is assembled:
//!
//! - [`AppendSigner`] adds the signature field alongside the original fields
//! - [`PackageSigner`] wraps the original document under a dedicated field
//!   next to the signature

mod append;
mod package;

pub use append::AppendSigner;
pub use package::PackageSigner;

use serde_json::Value;

use crate::document::Document;
use crate::error::SignError;
use jseal_canonical::{keyed_digest, DEFAULT_ALGORITHM};

/// Default field a signature is stored under
pub const DEFAULT_SIGNATURE_FIELD: &str = "__s";

/// Default field the package strategy wraps the original document under
pub const DEFAULT_PACKAGE_FIELD: &str = "__orig";

/// Configuration owned by every signing strategy instance
///
/// The algorithm selector is resolved when an operation runs, not when the
/// configuration is built, so it can be changed between operations. The
/// setters take `&mut self`: configure before use, and do not reconfigure
/// while operations are in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerConfig {
    /// Secret signing key; empty yields a key-less digest
    pub signing_key: String,
    /// Digest algorithm selector, validated at sign/verify time
    pub algorithm: String,
    /// Field the signature is stored under
    pub signature_field: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            signing_key: String::new(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            signature_field: DEFAULT_SIGNATURE_FIELD.to_string(),
        }
    }
}

/// Common contract for signing strategies
pub trait Signer {
    /// Configuration the strategy signs and verifies with
    fn config(&self) -> &SignerConfig;

    fn config_mut(&mut self) -> &mut SignerConfig;

    /// Sign a JSON document, returning the packaged artifact as JSON text
    ///
    /// # Errors
    ///
    /// - `SignError::MalformedInput` if the text does not parse to an object
    /// - `SignError::SignatureCollision` if a reserved field already exists;
    ///   raised before any digest work
    /// - `SignError::Configuration` for an unknown digest algorithm
    fn sign(&self, json: &str) -> Result<String, SignError>;

    /// Verify a signed JSON document against its embedded signature, or
    /// against `detached_signature` when one is supplied (an empty string
    /// counts as absent)
    ///
    /// # Errors
    ///
    /// - `SignError::MalformedInput` if the text does not parse to an object
    /// - `SignError::MissingSignature` if no signature is embedded and none
    ///   was supplied
    /// - `SignError::Configuration` for an unknown digest algorithm
    fn verify(&self, json: &str, detached_signature: Option<&str>) -> Result<bool, SignError>;

    /// Compute the detached signature of a JSON document without packaging
    ///
    /// The signature field is stripped if present, top-level keys are
    /// sorted, and the keyed digest is computed over the canonical bytes.
    fn signature(&self, json: &str) -> Result<String, SignError> {
        let document = Document::parse(json)?;
        compute_signature(self.config(), &document)
    }

    /// Replace the secret signing key
    fn set_signing_key(&mut self, key: &str) {
        self.config_mut().signing_key = key.to_string();
    }

    /// Replace the digest algorithm; validated on the next operation
    fn set_algorithm(&mut self, algorithm: &str) {
        self.config_mut().algorithm = algorithm.to_string();
    }

    /// Replace the field the signature is stored under
    fn set_signature_field(&mut self, field: &str) {
        self.config_mut().signature_field = field.to_string();
    }
}

/// Keyed digest of a document's canonical bytes: signature field stripped,
/// top-level keys sorted, digest over canonical bytes plus key
pub(crate) fn compute_signature(
    config: &SignerConfig,
    document: &Document,
) -> Result<String, SignError> {
    let canonical = document.canonical_bytes(&config.signature_field)?;
    Ok(keyed_digest(
        &config.algorithm,
        &canonical,
        &config.signing_key,
    )?)
}

/// Select the signature to verify against: a non-empty detached argument
/// wins, then the embedded field. `Ok(None)` means the embedded field is
/// present but not a string, which can never match a hex digest.
pub(crate) fn provided_signature(
    config: &SignerConfig,
    document: &Document,
    detached_signature: Option<&str>,
) -> Result<Option<String>, SignError> {
    if let Some(detached) = detached_signature.filter(|s| !s.is_empty()) {
        return Ok(Some(detached.to_string()));
    }
    match document.get(&config.signature_field) {
        Some(Value::String(embedded)) => Ok(Some(embedded.clone())),
        Some(_) => Ok(None),
        None => Err(SignError::MissingSignature),
    }
}

//! In-place signing: the signature lands alongside the original fields

use serde_json::Value;

use crate::document::Document;
use crate::error::SignError;
use crate::signers::{compute_signature, provided_signature, Signer, SignerConfig};

/// Signs a document by appending the signature field to it
///
/// The emitted artifact keeps the source key order with the signature field
/// trailing; only the hashed copy is sorted.
///
/// # Example
///
/// ```rust
/// use jseal_core::{AppendSigner, Signer};
///
/// let signer = AppendSigner::new("secret");
/// let signed = signer.sign(r#"{"user":"ada"}"#).unwrap();
/// assert!(signer.verify(&signed, None).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppendSigner {
    config: SignerConfig,
}

impl AppendSigner {
    /// Signer with the given signing key and defaults otherwise
    pub fn new(signing_key: &str) -> Self {
        Self {
            config: SignerConfig {
                signing_key: signing_key.to_string(),
                ..SignerConfig::default()
            },
        }
    }

    /// Signer with a full configuration
    pub fn with_config(config: SignerConfig) -> Self {
        Self { config }
    }
}

impl Signer for AppendSigner {
    fn config(&self) -> &SignerConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut SignerConfig {
        &mut self.config
    }

    fn sign(&self, json: &str) -> Result<String, SignError> {
        let mut document = Document::parse(json)?;

        if document.contains(&self.config.signature_field) {
            return Err(SignError::SignatureCollision(
                self.config.signature_field.clone(),
            ));
        }

        let signature = compute_signature(&self.config, &document)?;
        document.set(
            self.config.signature_field.clone(),
            Value::String(signature),
        );

        Ok(document.to_json())
    }

    fn verify(&self, json: &str, detached_signature: Option<&str>) -> Result<bool, SignError> {
        let document = Document::parse(json)?;

        let provided = match provided_signature(&self.config, &document, detached_signature)? {
            Some(provided) => provided,
            None => return Ok(false),
        };

        let expected = compute_signature(&self.config, &document)?;

        Ok(provided == expected)
    }
}

//! Wrap-and-package signing: the original document is nested under a
//! dedicated field next to its signature

use serde_json::Value;

use crate::document::Document;
use crate::error::SignError;
use crate::signers::{
    compute_signature, provided_signature, Signer, SignerConfig, DEFAULT_PACKAGE_FIELD,
};

/// Signs a document by wrapping it
///
/// The artifact is a new two-field object: the package field holds the
/// original document, the signature field holds the signature computed over
/// the original, pre-wrap document. Verification always recomputes over the
/// wrapped content, whether the signature being checked is embedded or
/// detached.
///
/// # Example
///
/// ```rust
/// use jseal_core::{PackageSigner, Signer};
///
/// let signer = PackageSigner::new("secret");
/// let signed = signer.sign(r#"{"user":"ada"}"#).unwrap();
/// assert!(signed.starts_with(r#"{"__orig":"#));
/// assert!(signer.verify(&signed, None).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PackageSigner {
    config: SignerConfig,
    package_field: String,
}

impl Default for PackageSigner {
    fn default() -> Self {
        Self {
            config: SignerConfig::default(),
            package_field: DEFAULT_PACKAGE_FIELD.to_string(),
        }
    }
}

impl PackageSigner {
    /// Signer with the given signing key and defaults otherwise
    pub fn new(signing_key: &str) -> Self {
        Self {
            config: SignerConfig {
                signing_key: signing_key.to_string(),
                ..SignerConfig::default()
            },
            ..Self::default()
        }
    }

    /// Signer with a full configuration
    pub fn with_config(config: SignerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Field the original document is wrapped under
    pub fn package_field(&self) -> &str {
        &self.package_field
    }

    /// Replace the field the original document is wrapped under
    pub fn set_package_field(&mut self, field: &str) {
        self.package_field = field.to_string();
    }
}

impl Signer for PackageSigner {
    fn config(&self) -> &SignerConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut SignerConfig {
        &mut self.config
    }

    fn sign(&self, json: &str) -> Result<String, SignError> {
        let document = Document::parse(json)?;

        // Both reserved fields must be free before any digest work
        if document.contains(&self.config.signature_field) {
            return Err(SignError::SignatureCollision(
                self.config.signature_field.clone(),
            ));
        }
        if document.contains(&self.package_field) {
            return Err(SignError::SignatureCollision(self.package_field.clone()));
        }

        let signature = compute_signature(&self.config, &document)?;

        let mut wrapper = Document::new();
        wrapper.set(self.package_field.clone(), document.into_value());
        wrapper.set(
            self.config.signature_field.clone(),
            Value::String(signature),
        );

        Ok(wrapper.to_json())
    }

    fn verify(&self, json: &str, detached_signature: Option<&str>) -> Result<bool, SignError> {
        let document = Document::parse(json)?;

        let provided = match provided_signature(&self.config, &document, detached_signature)? {
            Some(provided) => provided,
            None => return Ok(false),
        };

        let packaged = document.get(&self.package_field).ok_or_else(|| {
            SignError::MalformedInput(format!(
                "package field '{}' is missing",
                self.package_field
            ))
        })?;
        let original = Document::from_value(packaged.clone())?;

        let expected = compute_signature(&self.config, &original)?;

        Ok(provided == expected)
    }
}

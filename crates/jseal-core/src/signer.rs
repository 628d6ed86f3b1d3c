//! Facade over the closed set of signing strategies

use crate::error::SignError;
use crate::signers::{AppendSigner, PackageSigner, Signer};

/// Packaging strategy for signed artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Add the signature alongside the original fields
    Append,
    /// Wrap the original document under a dedicated field
    Package,
}

/// Entry point dispatching the fixed operation set to a selected strategy
///
/// Holds its own configuration; distinct instances share nothing, so using
/// them from distinct threads is safe. The setters take `&mut self`:
/// configure before use.
///
/// # Example
///
/// ```rust
/// use jseal_core::{JsonSigner, Strategy};
///
/// let mut signer = JsonSigner::new(Strategy::Append);
/// signer.set_signing_key("secret");
///
/// let signed = signer.sign(r#"{"user":"ada","role":"admin"}"#).unwrap();
/// assert!(signer.verify(&signed, None).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct JsonSigner {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Append(AppendSigner),
    Package(PackageSigner),
}

impl Default for JsonSigner {
    fn default() -> Self {
        Self::new(Strategy::Append)
    }
}

impl JsonSigner {
    /// Signer using the given strategy with default configuration
    pub fn new(strategy: Strategy) -> Self {
        let inner = match strategy {
            Strategy::Append => Inner::Append(AppendSigner::default()),
            Strategy::Package => Inner::Package(PackageSigner::default()),
        };
        Self { inner }
    }

    /// Signer using the given strategy and signing key
    pub fn with_signing_key(strategy: Strategy, signing_key: &str) -> Self {
        let mut signer = Self::new(strategy);
        signer.set_signing_key(signing_key);
        signer
    }

    /// The currently selected strategy
    pub fn strategy(&self) -> Strategy {
        match self.inner {
            Inner::Append(_) => Strategy::Append,
            Inner::Package(_) => Strategy::Package,
        }
    }

    /// Sign a JSON document, returning the packaged artifact as JSON text
    pub fn sign(&self, json: &str) -> Result<String, SignError> {
        self.as_signer().sign(json)
    }

    /// Compute the detached signature of a JSON document without packaging
    pub fn signature(&self, json: &str) -> Result<String, SignError> {
        self.as_signer().signature(json)
    }

    /// Verify a signed JSON document against its embedded signature, or
    /// against `detached_signature` when one is supplied
    pub fn verify(&self, json: &str, detached_signature: Option<&str>) -> Result<bool, SignError> {
        self.as_signer().verify(json, detached_signature)
    }

    /// Replace the secret signing key
    pub fn set_signing_key(&mut self, key: &str) {
        self.as_signer_mut().set_signing_key(key);
    }

    /// Replace the digest algorithm; validated on the next operation
    pub fn set_algorithm(&mut self, algorithm: &str) {
        self.as_signer_mut().set_algorithm(algorithm);
    }

    /// Replace the field the signature is stored under
    pub fn set_signature_field(&mut self, field: &str) {
        self.as_signer_mut().set_signature_field(field);
    }

    /// Replace the field the original document is wrapped under; has no
    /// effect on the append strategy
    pub fn set_package_field(&mut self, field: &str) {
        if let Inner::Package(signer) = &mut self.inner {
            signer.set_package_field(field);
        }
    }

    fn as_signer(&self) -> &dyn Signer {
        match &self.inner {
            Inner::Append(signer) => signer,
            Inner::Package(signer) => signer,
        }
    }

    fn as_signer_mut(&mut self) -> &mut dyn Signer {
        match &mut self.inner {
            Inner::Append(signer) => signer,
            Inner::Package(signer) => signer,
        }
    }
}

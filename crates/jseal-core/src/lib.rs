//! # jseal Core
//!
//! Keyed integrity signatures for JSON documents.
//!
//! This crate provides:
//! - [`Document`], the top-level JSON object model
//! - [`AppendSigner`] and [`PackageSigner`], the two packaging strategies
//! - [`JsonSigner`], a facade over the closed strategy set
//!
//! A signature is the keyed digest of a document's canonical bytes: the
//! signature field stripped, top-level keys sorted, compact serialization,
//! digest of those bytes directly followed by the secret key. Anyone who
//! holds the key can produce a valid signature, so this is tamper evidence
//! tied to a shared secret, not a public-key scheme.
//!
//! ## Example
//!
//! ```rust
//! use jseal_core::{AppendSigner, Signer};
//!
//! let signer = AppendSigner::new("secret");
//!
//! let signed = signer.sign(r#"{"user":"ada","role":"admin"}"#).unwrap();
//! assert!(signer.verify(&signed, None).unwrap());
//!
//! // The signature is independent of top-level key order
//! let a = signer.signature(r#"{"user":"ada","role":"admin"}"#).unwrap();
//! let b = signer.signature(r#"{"role":"admin","user":"ada"}"#).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod document;
pub mod error;
pub mod signer;
pub mod signers;

// Re-exports for convenience
pub use document::Document;
pub use error::SignError;
pub use signer::{JsonSigner, Strategy};
pub use signers::{
    AppendSigner, PackageSigner, Signer, SignerConfig, DEFAULT_PACKAGE_FIELD,
    DEFAULT_SIGNATURE_FIELD,
};

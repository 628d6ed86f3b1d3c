//! # jseal Canonical
//!
//! Deterministic canonical bytes and keyed digests for JSON signing.
//!
//! This crate provides:
//! - Canonical byte derivation: strip a named top-level field, sort
//!   top-level keys, serialize compactly
//! - Keyed digest computation over canonical bytes (sha2 family)
//!
//! ## Canonicalization Rules
//!
//! 1. The excluded field (normally the signature field) is removed if present
//! 2. Top-level keys sorted ascending by UTF-8 bytes
//! 3. Nested objects and arrays serialize in the order encountered
//! 4. No whitespace
//!
//! Only the top level is re-sorted. Two documents that differ solely in the
//! key order of a *nested* object produce different canonical bytes, and so
//! different signatures.
//!
//! ## Example
//!
//! ```rust
//! use jseal_canonical::{canonical_string, keyed_digest, DEFAULT_ALGORITHM};
//!
//! let value = serde_json::json!({"b": 1, "a": 2, "__s": "stale"});
//! let object = value.as_object().unwrap();
//!
//! let canonical = canonical_string(object, "__s").unwrap();
//! assert_eq!(canonical, r#"{"a":2,"b":1}"#);
//!
//! let signature = keyed_digest(DEFAULT_ALGORITHM, canonical.as_bytes(), "secret").unwrap();
//! assert_eq!(signature.len(), 64);
//! ```

mod canonical;
mod digest;
mod error;

pub use canonical::*;
pub use digest::*;
pub use error::*;

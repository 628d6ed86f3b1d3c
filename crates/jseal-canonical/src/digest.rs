//! Keyed digest computation over canonical bytes

use crate::error::CanonicalError;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Digest algorithm used when none is configured
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Recognised digest algorithm selectors
pub const SUPPORTED_ALGORITHMS: [&str; 4] = ["sha224", "sha256", "sha384", "sha512"];

/// Whether an algorithm selector is recognised
pub fn is_supported(algorithm: &str) -> bool {
    SUPPORTED_ALGORITHMS.contains(&algorithm)
}

/// Lowercase hex digest of canonical bytes followed by the signing key,
/// concatenated with no delimiter
///
/// An empty key is legal and yields a key-less digest. The output length
/// depends on the algorithm (64 hex characters for sha256).
///
/// # Errors
///
/// Returns `CanonicalError::UnknownAlgorithm` for an unrecognised selector.
///
/// # Example
///
/// ```rust
/// use jseal_canonical::keyed_digest;
///
/// let signature = keyed_digest("sha256", b"{\"a\":1}", "secret").unwrap();
/// assert_eq!(signature.len(), 64);
/// assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn keyed_digest(
    algorithm: &str,
    canonical: &[u8],
    key: &str,
) -> Result<String, CanonicalError> {
    match algorithm {
        "sha224" => Ok(hash_parts::<Sha224>(canonical, key.as_bytes())),
        "sha256" => Ok(hash_parts::<Sha256>(canonical, key.as_bytes())),
        "sha384" => Ok(hash_parts::<Sha384>(canonical, key.as_bytes())),
        "sha512" => Ok(hash_parts::<Sha512>(canonical, key.as_bytes())),
        other => Err(CanonicalError::UnknownAlgorithm(other.to_string())),
    }
}

/// Lowercase hex digest of raw bytes, no key
pub fn digest_hex(algorithm: &str, data: &[u8]) -> Result<String, CanonicalError> {
    keyed_digest(algorithm, data, "")
}

fn hash_parts<D: Digest>(canonical: &[u8], key: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(canonical);
    hasher.update(key);
    hex::encode(hasher.finalize())
}

//! Canonical byte derivation for signing

use crate::error::CanonicalError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Derive the canonical bytes of a top-level JSON object
///
/// # Rules
///
/// - The named field is removed if present (absence is not an error)
/// - Top-level keys sorted ascending by UTF-8 bytes
/// - Nested objects and arrays serialize in the order encountered
/// - No whitespace
///
/// # Example
///
/// ```rust
/// use jseal_canonical::canonical_bytes;
///
/// let value = serde_json::json!({"z": 1, "a": 2, "__s": "old"});
/// let canonical = canonical_bytes(value.as_object().unwrap(), "__s").unwrap();
/// assert_eq!(canonical, b"{\"a\":2,\"z\":1}");
/// ```
pub fn canonical_bytes(
    object: &Map<String, Value>,
    exclude_field: &str,
) -> Result<Vec<u8>, CanonicalError> {
    let mut entries: Vec<(&String, &Value)> = object
        .iter()
        .filter(|(key, _)| key.as_str() != exclude_field)
        .collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut sorted = Map::with_capacity(entries.len());
    for (key, value) in entries {
        sorted.insert(key.clone(), value.clone());
    }

    Ok(serde_json::to_vec(&Value::Object(sorted))?)
}

/// Canonical bytes as a UTF-8 string
pub fn canonical_string(
    object: &Map<String, Value>,
    exclude_field: &str,
) -> Result<String, CanonicalError> {
    let bytes = canonical_bytes(object, exclude_field)?;
    // Safe because we only produce valid UTF-8
    Ok(String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8"))
}

/// Canonicalize any serializable value whose top level is a JSON object
///
/// # Errors
///
/// Returns `CanonicalError::NotAnObject` if the serialized form is not a
/// JSON object at the top level.
pub fn canonical_bytes_of<T: Serialize>(
    value: &T,
    exclude_field: &str,
) -> Result<Vec<u8>, CanonicalError> {
    match serde_json::to_value(value)? {
        Value::Object(object) => canonical_bytes(&object, exclude_field),
        _ => Err(CanonicalError::NotAnObject),
    }
}

//! Top-level JSON document model

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::SignError;
use jseal_canonical::CanonicalError;

/// A parsed top-level JSON object
///
/// Keys are unique at every level; duplicate keys in source text resolve
/// last-write-wins, matching JSON object decoding semantics. Fields iterate
/// in source order, and fields added later append at the end, so
/// serialization order equals iteration order. Cloning yields a deep,
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SignError::MalformedInput` if the text is not valid JSON or
    /// the top-level value is not an object.
    pub fn parse(json: &str) -> Result<Self, SignError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| SignError::MalformedInput(err.to_string()))?;
        Self::from_value(value)
    }

    /// Build a document from an already-parsed value
    ///
    /// # Errors
    ///
    /// Returns `SignError::MalformedInput` if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, SignError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SignError::MalformedInput(format!(
                "expected a top-level JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Build a document from a native field map
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Whether a top-level field exists
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Value of a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a top-level field; a new field appends at the end
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Remove a top-level field, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sort top-level keys ascending by UTF-8 bytes
    pub fn sort_keys(&mut self) {
        let mut entries: Vec<(String, Value)> =
            std::mem::take(&mut self.fields).into_iter().collect();
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        self.fields = entries.into_iter().collect();
    }

    /// Canonical bytes of this document with the named field excluded
    ///
    /// Works on a sorted copy; the document itself is untouched.
    pub fn canonical_bytes(&self, exclude_field: &str) -> Result<Vec<u8>, CanonicalError> {
        jseal_canonical::canonical_bytes(&self.fields, exclude_field)
    }

    /// Compact JSON text in current field order
    pub fn to_json(&self) -> String {
        // A map with string keys always serializes
        serde_json::to_string(&self.fields).expect("JSON object serialization cannot fail")
    }

    /// Borrow the underlying field map
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl FromStr for Document {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

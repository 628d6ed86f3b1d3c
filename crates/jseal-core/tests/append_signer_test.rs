//! Tests for the append signing strategy

use jseal_core::{AppendSigner, SignError, Signer, SignerConfig};
use pretty_assertions::assert_eq;
use serde_json::json;

const DOCUMENT: &str =
    r#"{"key1":"value1","array1":{"subkey1":"subvalue1","subkey2":"subvalue2"},"key2":"value2"}"#;
const SIGNING_KEY: &str = "123456789";
const EXPECTED_SIGNATURE: &str =
    "f93a2481b14365e53e69399b3f0b5b950d3af1eaba039a2e8089c087af5f3cd1";

#[test]
fn test_known_signature() {
    let signer = AppendSigner::new(SIGNING_KEY);
    assert_eq!(signer.signature(DOCUMENT).unwrap(), EXPECTED_SIGNATURE);
}

#[test]
fn test_sign_appends_signature_in_source_order() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    assert_eq!(
        signed,
        format!(
            r#"{{"key1":"value1","array1":{{"subkey1":"subvalue1","subkey2":"subvalue2"}},"key2":"value2","__s":"{}"}}"#,
            EXPECTED_SIGNATURE
        )
    );
}

#[test]
fn test_sign_is_deterministic() {
    let signer = AppendSigner::new(SIGNING_KEY);
    assert_eq!(signer.sign(DOCUMENT).unwrap(), signer.sign(DOCUMENT).unwrap());
}

#[test]
fn test_round_trip() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();
    assert!(signer.verify(&signed, None).unwrap());
}

#[test]
fn test_round_trip_without_key() {
    let signer = AppendSigner::default();
    let signed = signer.sign(r#"{"a":1}"#).unwrap();
    assert!(signer.verify(&signed, None).unwrap());
}

#[test]
fn test_round_trip_empty_document() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign("{}").unwrap();
    assert!(signer.verify(&signed, None).unwrap());
}

#[test]
fn test_signature_independent_of_top_level_order() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let reordered =
        r#"{"key2":"value2","key1":"value1","array1":{"subkey1":"subvalue1","subkey2":"subvalue2"}}"#;

    assert_eq!(signer.signature(reordered).unwrap(), EXPECTED_SIGNATURE);
}

#[test]
fn test_signature_sensitive_to_nested_order() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let nested_reordered =
        r#"{"key1":"value1","array1":{"subkey2":"subvalue2","subkey1":"subvalue1"},"key2":"value2"}"#;

    assert_ne!(signer.signature(nested_reordered).unwrap(), EXPECTED_SIGNATURE);
}

#[test]
fn test_signature_strips_existing_signature_field() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    // The detached signature of a signed artifact equals that of the original
    assert_eq!(signer.signature(&signed).unwrap(), EXPECTED_SIGNATURE);
}

#[test]
fn test_tampered_value_fails_verification() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();
    let tampered = signed.replace("value2", "VALUE2");

    assert!(!signer.verify(&tampered, None).unwrap());
}

#[test]
fn test_tampered_nested_value_fails_verification() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();
    let tampered = signed.replace("subvalue1", "subvalue1x");

    assert!(!signer.verify(&tampered, None).unwrap());
}

#[test]
fn test_added_field_fails_verification() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(r#"{"a":1}"#).unwrap();
    let tampered = signed.replacen('{', r#"{"extra":true,"#, 1);

    assert!(!signer.verify(&tampered, None).unwrap());
}

#[test]
fn test_sign_already_signed_collides() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    assert_eq!(
        signer.sign(&signed),
        Err(SignError::SignatureCollision("__s".to_string()))
    );
}

#[test]
fn test_verify_unsigned_without_detached_signature() {
    let signer = AppendSigner::new(SIGNING_KEY);

    assert_eq!(signer.verify(DOCUMENT, None), Err(SignError::MissingSignature));
}

#[test]
fn test_empty_detached_signature_counts_as_absent() {
    let signer = AppendSigner::new(SIGNING_KEY);

    assert_eq!(
        signer.verify(DOCUMENT, Some("")),
        Err(SignError::MissingSignature)
    );
}

#[test]
fn test_verify_with_detached_signature() {
    let signer = AppendSigner::new(SIGNING_KEY);

    assert!(signer.verify(DOCUMENT, Some(EXPECTED_SIGNATURE)).unwrap());
    assert!(!signer.verify(DOCUMENT, Some("0000")).unwrap());
}

#[test]
fn test_detached_signature_wins_over_embedded() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    // A wrong detached signature must fail even though the embedded one is good
    assert!(!signer.verify(&signed, Some("0000")).unwrap());
}

#[test]
fn test_non_string_embedded_signature_fails_closed() {
    let signer = AppendSigner::new(SIGNING_KEY);

    assert!(!signer.verify(r#"{"a":1,"__s":42}"#, None).unwrap());
    assert!(!signer.verify(r#"{"a":1,"__s":null}"#, None).unwrap());
}

#[test]
fn test_different_keys_produce_different_signatures() {
    let first = AppendSigner::new("key-one");
    let second = AppendSigner::new("key-two");

    assert_ne!(
        first.signature(DOCUMENT).unwrap(),
        second.signature(DOCUMENT).unwrap()
    );
}

#[test]
fn test_verify_with_wrong_key_fails() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    let other = AppendSigner::new("different-key");
    assert!(!other.verify(&signed, None).unwrap());
}

#[test]
fn test_malformed_input() {
    let signer = AppendSigner::new(SIGNING_KEY);

    assert!(matches!(
        signer.sign("{ not json }"),
        Err(SignError::MalformedInput(_))
    ));
    assert!(matches!(
        signer.sign(r#"[1,2,3]"#),
        Err(SignError::MalformedInput(_))
    ));
    assert!(matches!(
        signer.verify("{ not json }", None),
        Err(SignError::MalformedInput(_))
    ));
}

#[test]
fn test_unknown_algorithm_fails_at_use_time() {
    let mut signer = AppendSigner::new(SIGNING_KEY);
    signer.set_algorithm("md5");

    assert!(matches!(
        signer.sign(DOCUMENT),
        Err(SignError::Configuration(_))
    ));

    let good = AppendSigner::new(SIGNING_KEY).sign(DOCUMENT).unwrap();
    assert!(matches!(
        signer.verify(&good, None),
        Err(SignError::Configuration(_))
    ));
}

#[test]
fn test_algorithm_changeable_after_construction() {
    let mut signer = AppendSigner::new(SIGNING_KEY);
    let sha256 = signer.signature(DOCUMENT).unwrap();

    signer.set_algorithm("sha512");
    let sha512 = signer.signature(DOCUMENT).unwrap();

    assert_eq!(sha256.len(), 64);
    assert_eq!(sha512.len(), 128);
    assert_ne!(sha256, sha512);
}

#[test]
fn test_custom_signature_field() {
    let mut signer = AppendSigner::new(SIGNING_KEY);
    signer.set_signature_field("checksum");

    let signed = signer.sign(r#"{"a":1}"#).unwrap();
    let artifact: serde_json::Value = serde_json::from_str(&signed).unwrap();

    assert!(artifact.get("checksum").is_some());
    assert!(artifact.get("__s").is_none());
    assert!(signer.verify(&signed, None).unwrap());

    // Collision is checked against the configured field
    assert_eq!(
        signer.sign(&signed),
        Err(SignError::SignatureCollision("checksum".to_string()))
    );
}

#[test]
fn test_with_config() {
    let signer = AppendSigner::with_config(SignerConfig {
        signing_key: SIGNING_KEY.to_string(),
        algorithm: "sha256".to_string(),
        signature_field: "sig".to_string(),
    });

    let signed = signer.sign(r#"{"a":1}"#).unwrap();
    let artifact: serde_json::Value = serde_json::from_str(&signed).unwrap();

    assert_eq!(artifact.get("sig").map(|v| v.is_string()), Some(true));
}

#[test]
fn test_signed_artifact_remains_valid_json_superset() {
    let signer = AppendSigner::new(SIGNING_KEY);
    let signed = signer.sign(DOCUMENT).unwrap();

    let artifact: serde_json::Value = serde_json::from_str(&signed).unwrap();
    let original: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();

    for (key, value) in original.as_object().unwrap() {
        assert_eq!(artifact.get(key), Some(value));
    }
    assert_eq!(artifact.get("__s"), Some(&json!(EXPECTED_SIGNATURE)));
}

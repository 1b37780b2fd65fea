//! Tests for webhook signature computation and verification.

use crate::signature::{ValidationError, compute_signature, verify_signature};

const TEST_SECRET: &str = "testsecret123456789012345678901234567890-1";
const TEST_PAYLOAD: &str = r#"{"id":"test1234","message":"hello"}"#;

#[test]
fn signature_header_name_is_stable() {
    assert_eq!(crate::signature::SIGNATURE_HEADER, "X-Pearl-API-Signature");
}

mod compute {
    use super::*;

    #[test]
    fn known_vector_matches() {
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();

        assert_eq!(signature, "5jrSlBc47Xrc4Y78dKF9RY76/W8=");
    }

    #[test]
    fn output_is_28_chars_of_base64() {
        // 20 bytes of HMAC-SHA1 output, Base64-encoded.
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();

        assert_eq!(signature.len(), 28);
        assert!(signature.ends_with('='));
    }

    #[test]
    fn same_inputs_always_produce_same_signature() {
        let first = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();
        let second = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn different_secrets_produce_different_signatures() {
        let first = compute_signature("secret1", TEST_PAYLOAD).unwrap();
        let second = compute_signature("secret2", TEST_PAYLOAD).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn different_payloads_produce_different_signatures() {
        let first = compute_signature(TEST_SECRET, r#"{"message":"hello"}"#).unwrap();
        let second = compute_signature(TEST_SECRET, r#"{"message":"world"}"#).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let result = compute_signature("", TEST_PAYLOAD);

        assert_eq!(result, Err(ValidationError::EmptySecret));
    }

    #[test]
    fn payload_whitespace_is_significant() {
        // The signature covers the exact bytes; a re-serialized payload
        // with different spacing must not verify.
        let compact = compute_signature(TEST_SECRET, r#"{"a":1}"#).unwrap();
        let spaced = compute_signature(TEST_SECRET, r#"{"a": 1}"#).unwrap();

        assert_ne!(compact, spaced);
    }
}

mod verify {
    use super::*;

    #[test]
    fn round_trips_computed_signature() {
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();

        assert_eq!(verify_signature(&signature, TEST_PAYLOAD, TEST_SECRET), Ok(true));
    }

    #[test]
    fn rejects_tampered_payload() {
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();
        let tampered = r#"{"id":"test1234","message":"hello_tampered"}"#;

        assert_eq!(verify_signature(&signature, tampered, TEST_SECRET), Ok(false));
    }

    #[test]
    fn rejects_single_byte_change() {
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();
        let flipped = TEST_PAYLOAD.replace("hello", "hellp");

        assert_eq!(verify_signature(&signature, &flipped, TEST_SECRET), Ok(false));
    }

    #[test]
    fn rejects_valid_signature_of_wrong_payload() {
        // Correct length, correct encoding, genuinely computed, just for
        // different bytes.
        let other = compute_signature(TEST_SECRET, r#"{"message":"other"}"#).unwrap();

        assert_eq!(verify_signature(&other, TEST_PAYLOAD, TEST_SECRET), Ok(false));
    }

    #[test]
    fn rejects_wrong_signature_of_correct_length() {
        // 20 zero bytes Base64-encoded: decodes to the right length, so
        // the constant-time comparison itself reports the mismatch.
        let zeros = "AAAAAAAAAAAAAAAAAAAAAAAAAAA=";

        assert_eq!(verify_signature(zeros, TEST_PAYLOAD, TEST_SECRET), Ok(false));
    }

    #[test]
    fn rejects_decoded_length_mismatch_without_comparison() {
        // Valid Base64 of fewer than 20 bytes.
        let short = "aGVsbG8=";

        assert_eq!(verify_signature(short, TEST_PAYLOAD, TEST_SECRET), Ok(false));
    }

    #[test]
    fn malformed_base64_is_a_mismatch_not_an_error() {
        for malformed in ["not-valid-base64!", "invalid-signature-12345=", "%%%%"] {
            assert_eq!(
                verify_signature(malformed, TEST_PAYLOAD, TEST_SECRET),
                Ok(false),
                "{malformed:?} should verify as false"
            );
        }
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let signature = compute_signature("secret1", TEST_PAYLOAD).unwrap();

        assert_eq!(verify_signature(&signature, TEST_PAYLOAD, "secret2"), Ok(false));
    }

    #[test]
    fn empty_arguments_are_rejected() {
        let signature = compute_signature(TEST_SECRET, TEST_PAYLOAD).unwrap();

        assert_eq!(
            verify_signature("", TEST_PAYLOAD, TEST_SECRET),
            Err(ValidationError::EmptySignature)
        );
        assert_eq!(
            verify_signature(&signature, "", TEST_SECRET),
            Err(ValidationError::EmptyPayload)
        );
        assert_eq!(
            verify_signature(&signature, TEST_PAYLOAD, ""),
            Err(ValidationError::EmptySecret)
        );
    }

    #[test]
    fn round_trip_holds_for_assorted_inputs() {
        let cases = [
            ("s", "p"),
            ("a-much-longer-secret-with-punctuation!?", "payload"),
            (TEST_SECRET, "{}"),
            (TEST_SECRET, "non-json payload \u{1F980} with unicode"),
        ];

        for (secret, payload) in cases {
            let signature = compute_signature(secret, payload).unwrap();
            assert_eq!(
                verify_signature(&signature, payload, secret),
                Ok(true),
                "round trip failed for {secret:?}/{payload:?}"
            );
        }
    }
}

//! Webhook signature computation and verification.
//!
//! Pearl signs each webhook delivery with an HMAC-SHA1 over the raw request
//! body, keyed with a value derived from the webhook secret, and sends the
//! Base64 result in the [`SIGNATURE_HEADER`] header. This module implements
//! the same scheme so callers can verify inbound deliveries (or sign test
//! payloads of their own).
//!
//! The key derivation is deliberately string-shaped: the secret is suffixed
//! with a fixed literal, hashed with SHA-256, and the *uppercase hex text*
//! of that digest (not the raw digest bytes) becomes the HMAC key. Re-hex
//! encoding changes the effective key length and value, so both sides must
//! agree on it exactly.
//!
//! # Example
//!
//! ```
//! use pearl_sdk::signature::{compute_signature, verify_signature};
//!
//! let secret = "my-webhook-secret";
//! let payload = r#"{"id":"evt_1","message":"hi"}"#;
//!
//! let signature = compute_signature(secret, payload).unwrap();
//! assert!(verify_signature(&signature, payload, secret).unwrap());
//! ```

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the webhook signature on inbound deliveries.
pub const SIGNATURE_HEADER: &str = "X-Pearl-API-Signature";

/// Fixed suffix concatenated to the secret before key derivation.
const KEY_DERIVATION_SUFFIX: &str = ":reference_token";

/// Error type for signature operations.
///
/// Raised synchronously when a required argument is empty. A signature
/// *mismatch* is never an error; verification reports it as `Ok(false)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The webhook secret was empty.
    #[error("Webhook secret cannot be empty")]
    EmptySecret,

    /// The webhook payload was empty.
    #[error("Webhook payload cannot be empty")]
    EmptyPayload,

    /// The received signature was empty.
    #[error("Received signature cannot be empty")]
    EmptySignature,
}

/// Derives the HMAC key from the webhook secret.
///
/// SHA-256 over the UTF-8 bytes of `secret` plus a fixed suffix, encoded as
/// uppercase hex. The hex *string* is the key material; it is computed
/// fresh on every call and never cached.
fn derive_signing_key(secret: &str) -> String {
    let digest = Sha256::digest(format!("{secret}{KEY_DERIVATION_SUFFIX}"));
    hex::encode_upper(digest)
}

/// Computes the HMAC-SHA1 signature for a webhook payload.
///
/// `payload` must be the exact byte-for-byte serialized body that was (or
/// will be) transmitted. Re-serializing a parsed object is not equivalent:
/// different key order or whitespace produces a different signature.
///
/// Returns the Base64-encoded HMAC-SHA1 output.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySecret`] if `secret` is empty.
pub fn compute_signature(secret: &str, payload: &str) -> Result<String, ValidationError> {
    if secret.is_empty() {
        return Err(ValidationError::EmptySecret);
    }

    let key = derive_signing_key(secret);
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Verifies the authenticity of a webhook payload against its signature.
///
/// Computes the expected signature for `payload` under `secret` and
/// compares it to `received_signature` in constant time, so the comparison
/// duration reveals nothing about where the two first differ.
///
/// Returns `Ok(false)`, not an error, for any well-formed mismatch: a
/// wrong signature, a tampered payload, a signature that does not decode as
/// Base64, or decoded bytes of the wrong length.
///
/// # Errors
///
/// Returns [`ValidationError`] if any argument is empty.
pub fn verify_signature(
    received_signature: &str,
    payload: &str,
    secret: &str,
) -> Result<bool, ValidationError> {
    if received_signature.is_empty() {
        return Err(ValidationError::EmptySignature);
    }
    if payload.is_empty() {
        return Err(ValidationError::EmptyPayload);
    }
    if secret.is_empty() {
        return Err(ValidationError::EmptySecret);
    }

    let expected_signature = compute_signature(secret, payload)?;

    let (Ok(received), Ok(expected)) = (
        BASE64.decode(received_signature),
        BASE64.decode(&expected_signature),
    ) else {
        tracing::debug!("received webhook signature is not valid base64");
        return Ok(false);
    };

    if received.len() != expected.len() {
        return Ok(false);
    }

    let is_valid = bool::from(received.as_slice().ct_eq(expected.as_slice()));
    if !is_valid {
        tracing::debug!("webhook signature verification failed");
    }

    Ok(is_valid)
}

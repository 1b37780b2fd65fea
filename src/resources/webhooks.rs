//! Webhook endpoint management and signature helpers.

use crate::signature::{self, ValidationError};
use crate::time::Sleeper;
use crate::transport::{ApiError, HttpClient, Transport};
use crate::types::WebhookEndpointRequest;

/// Webhook operations, reached via
/// [`PearlClient::webhooks`](crate::PearlClient::webhooks).
///
/// Endpoint registration goes to the API; signature helpers are local
/// computations over the client's credential (the webhook secret).
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a, H, S> {
    transport: &'a Transport<H, S>,
    secret: &'a str,
}

impl<'a, H, S> Webhooks<'a, H, S> {
    pub(crate) const fn new(transport: &'a Transport<H, S>, secret: &'a str) -> Self {
        Self { transport, secret }
    }

    /// Verifies the authenticity of an inbound webhook delivery.
    ///
    /// `received_signature` comes from the
    /// [`X-Pearl-API-Signature`](crate::signature::SIGNATURE_HEADER)
    /// header; `payload` must be the raw, unparsed request body string,
    /// not a re-serialization of the parsed object.
    ///
    /// Returns `Ok(false)` for an inauthentic delivery; that is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either argument (or the secret) is
    /// empty.
    pub fn is_valid_signature(
        &self,
        received_signature: &str,
        payload: &str,
    ) -> Result<bool, ValidationError> {
        signature::verify_signature(received_signature, payload, self.secret)
    }

    /// Computes the signature for a payload under the client's secret.
    ///
    /// Intended for testing webhook endpoints or signing outgoing
    /// payloads; plain verification should use
    /// [`is_valid_signature`](Self::is_valid_signature).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the secret is empty.
    pub fn compute_signature(&self, payload: &str) -> Result<String, ValidationError> {
        signature::compute_signature(self.secret, payload)
    }
}

impl<H: HttpClient, S: Sleeper> Webhooks<'_, H, S> {
    /// Registers a new webhook endpoint for message notifications.
    ///
    /// Maps to `POST /webhook`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the transport fails or the server answers
    /// with a non-success status.
    pub async fn register(&self, request: &WebhookEndpointRequest) -> Result<(), ApiError> {
        let body = serde_json::to_vec(request)?;
        self.transport
            .execute(http::Method::POST, "/webhook", Some(body))
            .await?;
        Ok(())
    }

    /// Updates the existing webhook endpoint.
    ///
    /// Maps to `PUT /webhook`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`register`](Self::register).
    pub async fn update(&self, request: &WebhookEndpointRequest) -> Result<(), ApiError> {
        let body = serde_json::to_vec(request)?;
        self.transport
            .execute(http::Method::PUT, "/webhook", Some(body))
            .await?;
        Ok(())
    }
}

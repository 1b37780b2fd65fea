//! Error types for transport and API operations.

use thiserror::Error;

use super::HttpResponse;
use crate::types::{ProblemDetails, ProblemDetailsResponse};

/// Error type for HTTP transport operations.
///
/// Describes what went wrong below the HTTP status level. These errors
/// carry no status code, so the retry policy never schedules a retry
/// for them; they propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type returned by Pearl API resource calls.
///
/// Either the transport failed outright ([`ApiError::Http`]), the server
/// answered with a terminal non-success status ([`ApiError::Status`]), or a
/// success response body could not be decoded ([`ApiError::Decode`]).
///
/// A request that exhausted its retries surfaces here with the same shape
/// as one that was never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP transport failed before a response was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-success status code.
    #[error("API request failed with status {status}")]
    Status {
        /// HTTP status code of the terminal response.
        status: http::StatusCode,
        /// Parsed error envelope, when the body carried one.
        error: Option<Box<ProblemDetails>>,
        /// Raw response body text, when valid UTF-8.
        body: Option<String>,
    },

    /// A success response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a terminal non-success response.
    ///
    /// The error envelope is parsed best-effort; a body that is not a
    /// `ProblemDetailsResponse` is kept as raw text only.
    #[must_use]
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        let error = serde_json::from_slice::<ProblemDetailsResponse>(&response.body)
            .ok()
            .map(|envelope| Box::new(envelope.error));

        Self::Status {
            status: response.status,
            error,
            body: response.body_text().map(ToString::to_string),
        }
    }

    /// Returns the HTTP status code of a terminal status failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) | Self::Decode(_) => None,
        }
    }
}

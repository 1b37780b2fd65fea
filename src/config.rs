//! Client configuration types.
//!
//! Configuration is in-memory only, held for the lifetime of the owning
//! [`PearlClient`](crate::PearlClient); there is no file loading.

use std::time::Duration;

use thiserror::Error;

use crate::transport::RetryConfig;

/// Default Pearl API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.pearl.com/api/v1";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PearlClient`](crate::PearlClient).
///
/// Only the API key is required; unset fields take the documented
/// defaults when the client is constructed.
///
/// # Example
///
/// ```
/// use pearl_sdk::{ClientConfig, RetryConfig};
/// use std::time::Duration;
///
/// let config = ClientConfig::new("your-api-key")
///     .with_timeout(Duration::from_secs(10))
///     .with_retry_policy(RetryConfig::default().with_max_retries(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credential sent as a bearer token; also used as the webhook
    /// secret.
    pub api_key: String,
    /// Base URL for all API paths. Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
    /// Retry policy configuration.
    pub retry_policy: RetryConfig,
}

impl ClientConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
            retry_policy: RetryConfig::default(),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy configuration.
    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryConfig) -> Self {
        self.retry_policy = retry_policy;
        self
    }
}

/// Error type for client and retry-policy construction.
///
/// Raised once, at construction; never during operation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API key was empty.
    #[error("Configuration must include a non-empty api_key")]
    MissingApiKey,

    /// The API key cannot be sent as an HTTP header value.
    #[error("api_key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    /// The configured timeout was zero.
    #[error("Timeout must be a positive duration")]
    NonPositiveTimeout,

    /// The base URL did not parse.
    #[error("Invalid base_url '{url}': {source}")]
    InvalidBaseUrl {
        /// The invalid URL string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A retry delay was zero.
    #[error("RetryPolicy: {field} must be a positive number")]
    NonPositiveRetryDelay {
        /// Name of the offending field
        field: &'static str,
    },

    /// The retry delay bounds were inverted.
    #[error(
        "RetryPolicy: initial_delay_ms ({initial_delay_ms}) cannot be greater than max_delay_ms ({max_delay_ms})"
    )]
    RetryDelayBoundsInverted {
        /// Configured base delay
        initial_delay_ms: u64,
        /// Configured delay ceiling
        max_delay_ms: u64,
    },
}

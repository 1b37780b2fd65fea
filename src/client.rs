//! Client façade for the Pearl API.

use std::time::Duration;

use crate::config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::resources::{Chat, Webhooks};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{HttpClient, ReqwestClient, RetryPolicy, Transport};

/// Client for the Pearl API.
///
/// Owns the retrying transport and hands out short-lived resource views:
/// [`chat`](Self::chat) for completions and [`webhooks`](Self::webhooks)
/// for endpoint management and signature verification. All state is
/// immutable after construction, so one client can be shared across any
/// number of concurrent tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
/// - `S`: The sleeper used for retry backoff (defaults to [`TokioSleeper`])
///
/// Tests inject mock implementations via
/// [`with_http_client`](Self::with_http_client) and
/// [`with_sleeper`](Self::with_sleeper).
///
/// # Example
///
/// ```no_run
/// use pearl_sdk::{ChatMessage, ClientConfig, PearlClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PearlClient::new(ClientConfig::new("your-api-key"))?;
///
/// let response = client
///     .chat()
///     .send_completion(vec![ChatMessage::user("Hello")], "session-1")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PearlClient<H = ReqwestClient, S = TokioSleeper> {
    transport: Transport<H, S>,
    api_key: String,
}

impl PearlClient<ReqwestClient, TokioSleeper> {
    /// Creates a client with the production HTTP stack.
    ///
    /// Builds a `reqwest` client with the configured timeout; requests
    /// carry `Authorization: Bearer <api_key>` and a JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is empty or not
    /// header-safe, the timeout is zero, the base URL does not parse, the
    /// retry configuration is invalid, or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let timeout = validated_timeout(&config)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Self::with_http_client(ReqwestClient::from_client(http), config)
    }
}

impl<H: HttpClient> PearlClient<H, TokioSleeper> {
    /// Creates a client over a custom [`HttpClient`] implementation.
    ///
    /// The configured timeout is validated but its enforcement is the
    /// client implementation's concern.
    ///
    /// # Errors
    ///
    /// Same validation as [`PearlClient::new`], minus the HTTP client
    /// build step.
    pub fn with_http_client(http: H, config: ClientConfig) -> Result<Self, ConfigError> {
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        validated_timeout(&config)?;

        let mut bearer = http::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ConfigError::InvalidApiKey)?;
        bearer.set_sensitive(true);

        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, bearer);
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url =
            url::Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            })?;

        let retry_policy = RetryPolicy::new(config.retry_policy)?;

        Ok(Self {
            transport: Transport::new(http, TokioSleeper, base_url, headers, retry_policy),
            api_key: config.api_key,
        })
    }
}

impl<H, S> PearlClient<H, S> {
    /// Replaces the sleeper used for retry backoff.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> PearlClient<H, S2> {
        PearlClient {
            transport: self.transport.with_sleeper(sleeper),
            api_key: self.api_key,
        }
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        self.transport.base_url()
    }

    /// Returns the active retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        self.transport.retry_policy()
    }
}

impl<H: HttpClient, S: Sleeper> PearlClient<H, S> {
    /// Returns the chat resource.
    #[must_use]
    pub const fn chat(&self) -> Chat<'_, H, S> {
        Chat::new(&self.transport)
    }

    /// Returns the webhooks resource.
    ///
    /// The client's API credential doubles as the webhook secret.
    #[must_use]
    pub fn webhooks(&self) -> Webhooks<'_, H, S> {
        Webhooks::new(&self.transport, &self.api_key)
    }
}

fn validated_timeout(config: &ClientConfig) -> Result<Duration, ConfigError> {
    let timeout = config.timeout.unwrap_or(DEFAULT_TIMEOUT);
    if timeout.is_zero() {
        return Err(ConfigError::NonPositiveTimeout);
    }
    Ok(timeout)
}

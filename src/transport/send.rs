//! Request dispatch with retry support.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::time::Sleeper;

use super::{ApiError, HttpClient, HttpError, HttpRequest, HttpResponse, RetryPolicy};

/// Dispatches Pearl API requests through an [`HttpClient`], consulting the
/// [`RetryPolicy`] between attempts.
///
/// Holds only immutable state after construction (base URL, default
/// headers, policy), so a single instance can serve any number of
/// concurrent requests. Each in-flight request owns its retry counter as a
/// local variable; nothing is shared between requests.
///
/// The backoff wait between attempts goes through the injected
/// [`Sleeper`], so it suspends only the one request's task and is aborted
/// by dropping the call future, so a cancelled request never issues
/// another attempt.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper implementation for retry delays
#[derive(Debug)]
pub struct Transport<H, S> {
    http: H,
    sleeper: S,
    base_url: url::Url,
    headers: http::HeaderMap,
    retry_policy: RetryPolicy,
}

impl<H, S> Transport<H, S> {
    /// Creates a transport over the given client and sleeper.
    pub(crate) const fn new(
        http: H,
        sleeper: S,
        base_url: url::Url,
        headers: http::HeaderMap,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            http,
            sleeper,
            base_url,
            headers,
            retry_policy,
        }
    }

    /// Replaces the sleeper, keeping everything else.
    pub(crate) fn with_sleeper<S2>(self, sleeper: S2) -> Transport<H, S2> {
        Transport {
            http: self.http,
            sleeper,
            base_url: self.base_url,
            headers: self.headers,
            retry_policy: self.retry_policy,
        }
    }

    /// Returns the configured base URL.
    pub(crate) const fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Returns the configured retry policy.
    pub(crate) const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Resolves an API path against the base URL.
    ///
    /// Plain string joining, so a base URL with a path prefix
    /// (`https://api.pearl.com/api/v1`) keeps its prefix regardless of
    /// leading slashes in `path`.
    fn endpoint(&self, path: &str) -> Result<url::Url, HttpError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url::Url::parse(&joined).map_err(|e| HttpError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Builds a request for an API path with the default headers applied.
    fn build_request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, HttpError> {
        let mut request = HttpRequest::new(method, self.endpoint(path)?);
        for (name, value) in &self.headers {
            request.headers.append(name, value.clone());
        }
        request.body = body;
        Ok(request)
    }
}

impl<H: HttpClient, S: Sleeper> Transport<H, S> {
    /// Sends a request, retrying per the policy, and returns the terminal
    /// response.
    ///
    /// The retry counter starts at 0 and is incremented each time a retry
    /// is scheduled. A non-success response consults
    /// [`RetryPolicy::should_retry`] with the counter and status; when it
    /// says retry, the transport sleeps for
    /// [`RetryPolicy::calculate_retry_delay`] of the incremented counter
    /// and resubmits the request unchanged. The terminal outcome (success,
    /// a non-retryable status, or retries exhausted) is returned as-is.
    ///
    /// Transport errors carry no status code and propagate immediately.
    async fn send_with_retry(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut retry_count: u32 = 0;

        loop {
            let response = self.http.request(request.clone()).await?;

            if response.is_success() {
                return Ok(response);
            }

            if !self
                .retry_policy
                .should_retry(retry_count, Some(response.status))
            {
                return Ok(response);
            }

            retry_count += 1;
            let delay = self.retry_policy.calculate_retry_delay(retry_count);
            tracing::debug!(
                status = %response.status,
                retry = retry_count,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying request"
            );
            self.sleeper.sleep(delay).await;
        }
    }

    /// Executes a request against an API path, surfacing terminal
    /// non-success statuses as [`ApiError::Status`].
    pub(crate) async fn execute(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body)?;
        let response = self.send_with_retry(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    /// Executes a request with a JSON body and decodes a JSON response.
    pub(crate) async fn execute_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_vec(body)?;
        let response = self.execute(method, path, Some(payload)).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

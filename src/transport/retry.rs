//! Retry policy for Pearl API requests.

use std::time::Duration;

use crate::config::ConfigError;

/// Configuration for [`RetryPolicy`], with optional fields.
///
/// Any field left unset falls back to the policy default when the
/// policy is constructed. Values are validated by [`RetryPolicy::new`],
/// not here.
///
/// # Example
///
/// ```
/// use pearl_sdk::transport::RetryConfig;
///
/// let config = RetryConfig::default()
///     .with_max_retries(5)
///     .with_initial_delay_ms(200)
///     .with_max_delay_ms(5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetryConfig {
    /// Whether retries are performed at all.
    pub enabled: Option<bool>,
    /// Upper bound on retry attempts per request.
    pub max_retries: Option<u32>,
    /// Base delay in milliseconds before exponential growth.
    pub initial_delay_ms: Option<u64>,
    /// Ceiling in milliseconds on the computed delay, before jitter.
    pub max_delay_ms: Option<u64>,
}

impl RetryConfig {
    /// Enables or disables retries.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the base delay in milliseconds.
    #[must_use]
    pub const fn with_initial_delay_ms(mut self, initial_delay_ms: u64) -> Self {
        self.initial_delay_ms = Some(initial_delay_ms);
        self
    }

    /// Sets the delay ceiling in milliseconds.
    #[must_use]
    pub const fn with_max_delay_ms(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = Some(max_delay_ms);
        self
    }
}

/// Decision engine for retrying failed Pearl API requests.
///
/// Stateless: given a request's current retry count and the status code of
/// the last response, [`should_retry`](Self::should_retry) decides whether
/// to try again, and [`calculate_retry_delay`](Self::calculate_retry_delay)
/// computes the backoff before the next attempt. The policy itself never
/// sleeps, performs I/O, or tracks per-request state; the transport owns
/// the retry counter and the suspension.
///
/// Only `422 Unprocessable Entity` is treated as transient. Other statuses,
/// including 5xx, fail immediately.
///
/// # Defaults
///
/// - `enabled`: true
/// - `max_retries`: 30
/// - `initial_delay_ms`: 100
/// - `max_delay_ms`: 30000
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use pearl_sdk::transport::{RetryConfig, RetryPolicy};
///
/// let policy = RetryPolicy::new(RetryConfig::default()).unwrap();
///
/// assert!(policy.should_retry(0, Some(StatusCode::UNPROCESSABLE_ENTITY)));
/// assert!(!policy.should_retry(0, Some(StatusCode::INTERNAL_SERVER_ERROR)));
/// assert!(!policy.should_retry(0, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    enabled: bool,
    max_retries: u32,
    initial_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    /// Default maximum number of retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 30;

    /// Default base delay (100 ms).
    pub const DEFAULT_INITIAL_DELAY_MS: u64 = 100;

    /// Default delay ceiling (30 seconds).
    pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

    /// Fraction of the capped delay added as jitter, at most.
    const JITTER_FACTOR: f64 = 0.1;

    /// Creates a policy from the given configuration.
    ///
    /// Unset fields take the documented defaults. Validation happens after
    /// defaulting, so an explicit invalid value fails even when the other
    /// fields are absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `initial_delay_ms` or `max_delay_ms` is
    /// zero, or if `initial_delay_ms` exceeds `max_delay_ms`.
    pub fn new(config: RetryConfig) -> Result<Self, ConfigError> {
        let policy = Self {
            enabled: config.enabled.unwrap_or(true),
            max_retries: config.max_retries.unwrap_or(Self::DEFAULT_MAX_RETRIES),
            initial_delay_ms: config
                .initial_delay_ms
                .unwrap_or(Self::DEFAULT_INITIAL_DELAY_MS),
            max_delay_ms: config.max_delay_ms.unwrap_or(Self::DEFAULT_MAX_DELAY_MS),
        };

        if policy.initial_delay_ms == 0 {
            return Err(ConfigError::NonPositiveRetryDelay {
                field: "initial_delay_ms",
            });
        }
        if policy.max_delay_ms == 0 {
            return Err(ConfigError::NonPositiveRetryDelay {
                field: "max_delay_ms",
            });
        }
        if policy.initial_delay_ms > policy.max_delay_ms {
            return Err(ConfigError::RetryDelayBoundsInverted {
                initial_delay_ms: policy.initial_delay_ms,
                max_delay_ms: policy.max_delay_ms,
            });
        }

        Ok(policy)
    }

    /// Returns whether retries are enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the maximum number of retries per request.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base delay in milliseconds.
    #[must_use]
    pub const fn initial_delay_ms(&self) -> u64 {
        self.initial_delay_ms
    }

    /// Returns the delay ceiling in milliseconds.
    #[must_use]
    pub const fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }

    /// Decides whether a request should be retried.
    ///
    /// # Arguments
    ///
    /// * `current_retry_count` - How many times this request has already
    ///   been retried (0 for a request that just failed its first attempt).
    /// * `status_code` - Status code of the failed response, if one was
    ///   received. Transport failures carry no status and are never
    ///   retried.
    ///
    /// Pure function of its inputs and the policy's immutable settings.
    #[must_use]
    pub fn should_retry(
        &self,
        current_retry_count: u32,
        status_code: Option<http::StatusCode>,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        // The retryable set is exactly {422}; 429 and 5xx are deliberately
        // excluded.
        let is_retryable_status = status_code == Some(http::StatusCode::UNPROCESSABLE_ENTITY);
        is_retryable_status && current_retry_count < self.max_retries
    }

    /// Computes the exponential backoff delay with jitter.
    ///
    /// `retry_count` is 1-indexed: the count *after* incrementing for the
    /// attempt being scheduled. The delay is
    /// `min(initial * 2^(retry_count - 1), max)` plus up to 10% uniform
    /// jitter, truncated to whole milliseconds. Jitter is non-negative, so
    /// the result never undershoots the capped delay.
    #[must_use]
    pub fn calculate_retry_delay(&self, retry_count: u32) -> Duration {
        self.delay_with_jitter(retry_count, rand::random::<f64>())
    }

    /// Deterministic core of [`calculate_retry_delay`]; `jitter` is the
    /// random draw in `[0, 1)`.
    // Safe casts: delays are bounded by max_delay_ms (u64 range); an
    // exponent beyond i32 saturates, and the cap absorbs the infinity.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub(crate) fn delay_with_jitter(&self, retry_count: u32, jitter: f64) -> Duration {
        let exponent = i32::try_from(retry_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let exponential = self.initial_delay_ms as f64 * 2f64.powi(exponent);
        let capped = exponential.min(self.max_delay_ms as f64);
        let delayed = capped + jitter * capped * Self::JITTER_FACTOR;
        Duration::from_millis(delayed.floor() as u64)
    }
}

impl Default for RetryPolicy {
    /// The default policy; equivalent to `RetryPolicy::new(RetryConfig::default())`,
    /// which cannot fail.
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: Self::DEFAULT_MAX_RETRIES,
            initial_delay_ms: Self::DEFAULT_INITIAL_DELAY_MS,
            max_delay_ms: Self::DEFAULT_MAX_DELAY_MS,
        }
    }
}

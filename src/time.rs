//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting
//! instant sleepers in tests while using the real tokio timer in
//! production.

use std::time::Duration;

/// Abstraction over timed suspension for testability.
///
/// Implementations suspend the calling task for a duration, allowing tests
/// to skip delays entirely instead of waiting in real time.
///
/// The returned future must be cancel-safe: dropping it aborts the wait
/// without side effects. The retrying transport relies on this so that a
/// cancelled request never schedules another attempt.
///
/// # Example
///
/// ```
/// use pearl_sdk::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// # async fn example() {
/// let sleeper = InstantSleeper;
/// sleeper.sleep(Duration::from_secs(3600)).await; // returns immediately
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper using the tokio timer.
///
/// Suspends only the calling task; other tasks on the runtime keep
/// making progress during the wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Sleeper that returns immediately regardless of the requested duration.
///
/// For tests that exercise retry loops without real delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    fn sleep(&self, _duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        std::future::ready(())
    }
}

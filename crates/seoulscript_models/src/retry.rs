//! Retry policy for gateway calls.

use std::time::Duration;

/// Linear backoff between attempts.
///
/// The delay after failed attempt `n` (zero-based) is `base_delay * (n + 1)`,
/// and there is no delay after the final attempt.
///
/// # Examples
///
/// ```
/// use seoulscript_models::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(
///     policy.delays(),
///     vec![Duration::from_millis(1500), Duration::from_millis(3000)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    max_attempts: u32,
    /// Unit of the linear backoff
    base_delay: Duration,
}

impl RetryPolicy {
    /// Default number of attempts.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Default backoff unit.
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1500);

    /// Create a policy. `max_attempts` of 0 is treated as 1.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// A policy that never retries.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Sleeps between consecutive attempts, in order.
    pub fn delays(&self) -> Vec<Duration> {
        (1..self.max_attempts)
            .map(|step| self.base_delay * step)
            .collect()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_BASE_DELAY)
    }
}

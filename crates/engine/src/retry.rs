//! Retry policy for lost allocation races
//!
//! Contention on the per-year sequence is a single-row lock race
//! between human-paced creations: short, and resolved as soon as the
//! winner commits. A handful of doubling pauses is all the policy a
//! loser needs before re-running the allocation unit.

use std::time::Duration;

/// How often and how fast a lost allocation is re-run
///
/// The allocator sleeps `backoff` before the first re-run and doubles
/// the pause on each further attempt, never past `backoff_cap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Re-runs after the initial attempt (0 disables retry)
    pub max_retries: u32,
    /// Pause before the first re-run
    pub backoff: Duration,
    /// Upper bound on any single pause
    pub backoff_cap: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_millis(10),
            backoff_cap: Duration::from_millis(100),
        }
    }
}

impl RetryConfig {
    /// Fail on the first lost race instead of re-running
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Set the number of re-runs
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial pause
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set the pause ceiling
    pub fn with_backoff_cap(mut self, backoff_cap: Duration) -> Self {
        self.backoff_cap = backoff_cap;
        self
    }

    /// Pause before re-run number `attempt` (0-based)
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        let doubling = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.backoff.saturating_mul(doubling).min(self.backoff_cap)
    }
}

//! Facade configuration

use dealdesk_core::Limits;
use dealdesk_engine::RetryConfig;

/// Configuration for a `Dealdesk` instance
///
/// Controls allocation retry behavior and content size limits. All
/// knobs have sensible defaults; construct with `Default` and adjust
/// with the `with_*` setters.
#[derive(Debug, Clone, Default)]
pub struct DealdeskConfig {
    /// Retry behavior for lost allocation races
    pub retry: RetryConfig,
    /// Content size caps enforced at creation and edit time
    pub limits: Limits,
}

impl DealdeskConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allocation retry configuration
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the content limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

use std::time::Duration;

/// Timeouts and pauses used during a keep-alive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Per-request HTTP timeout
    pub http_request: Duration,

    /// Fixed part of the wait before a retry
    pub retry_backoff_base: Duration,

    /// Added once per failed attempt number to the retry wait
    pub retry_backoff_step: Duration,

    /// Pause between two consecutive accounts
    pub account_spacing: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            retry_backoff_base: Duration::from_secs(5),
            retry_backoff_step: Duration::from_secs(5),
            account_spacing: Duration::from_secs(2),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every wait set to zero, keeping the request timeout
    pub fn without_delays() -> Self {
        Self {
            retry_backoff_base: Duration::ZERO,
            retry_backoff_step: Duration::ZERO,
            account_spacing: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Wait before retrying after attempt number `attempt` (1-based) failed
    pub fn retry_backoff(&self, attempt: u32) -> Duration {
        self.retry_backoff_base
            .saturating_add(self.retry_backoff_step.saturating_mul(attempt))
    }
}

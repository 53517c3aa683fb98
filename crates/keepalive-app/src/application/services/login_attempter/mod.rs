use log::{error, info, warn};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::instrument;

use keepalive_domain::account::Account;
use keepalive_domain::login::{AttemptOutcome, AttemptResult, LoginPortal};
use keepalive_infrastructure::config::TimeoutConfig;

mod attempt;

#[cfg(test)]
mod tests;

/// Logs one account into the control panel, retrying on recoverable failures
pub struct LoginAttempter {
    portal: Arc<dyn LoginPortal>,
    max_retries: u32,
    timeouts: TimeoutConfig,
}

impl LoginAttempter {
    pub fn new(portal: Arc<dyn LoginPortal>, max_retries: u32, timeouts: TimeoutConfig) -> Self {
        Self {
            portal,
            max_retries,
            timeouts,
        }
    }

    /// Run up to `max_retries + 1` attempts and return the final result.
    ///
    /// Never fails: every problem ends up in the returned `AttemptResult`.
    /// Retryable failures wait `retry_backoff(attempt)` before the next
    /// attempt; a terminal outcome returns immediately.
    #[instrument(skip(self, account), fields(username = %account.username()))]
    pub async fn attempt_login(&self, account: &Account) -> AttemptResult {
        let username = account.username();
        let total_attempts = self.max_retries.saturating_add(1);
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);
            info!(
                "[{}] Starting login (attempt {}/{})",
                username, attempt, total_attempts
            );

            match attempt::run_attempt(&*self.portal, account).await {
                AttemptOutcome::Succeeded(indicator) => {
                    info!("[{}] {}", username, indicator.detail());
                    return AttemptResult::succeeded(username, &indicator, attempt);
                }
                AttemptOutcome::Terminal(err) => {
                    warn!("[{}] Logged in, but {}", username, err);
                    return AttemptResult::failed(username, &err, attempt);
                }
                AttemptOutcome::Retryable(err) => {
                    warn!("[{}] Attempt {} failed: {}", username, attempt, err);

                    if attempt > self.max_retries || attempt == u32::MAX {
                        error!(
                            "[{}] Login failed after {} attempts",
                            username, attempt
                        );
                        return AttemptResult::failed(username, &err, attempt);
                    }

                    let wait = self.timeouts.retry_backoff(attempt);
                    info!("[{}] Retrying in {}s", username, wait.as_secs());
                    sleep(wait).await;
                }
            }
        }
    }
}

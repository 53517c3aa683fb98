use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::instrument;

use keepalive_domain::account::Account;
use keepalive_domain::login::{AttemptResult, LoginPortal, RunSummary};
use keepalive_infrastructure::config::TimeoutConfig;

use super::login_attempter::LoginAttempter;
use crate::application::config::ACCOUNTS_VAR;

/// Logs every configured account in, one after another
pub struct KeepAliveRunner {
    attempter: LoginAttempter,
    account_spacing: Duration,
}

impl KeepAliveRunner {
    pub fn new(portal: Arc<dyn LoginPortal>, max_retries: u32, timeouts: TimeoutConfig) -> Self {
        let account_spacing = timeouts.account_spacing;
        Self {
            attempter: LoginAttempter::new(portal, max_retries, timeouts),
            account_spacing,
        }
    }

    /// Process accounts in order and collect one result per account.
    ///
    /// An empty list logs an error and returns an empty summary.
    #[instrument(skip(self, accounts), fields(batch_size = accounts.len()))]
    pub async fn run(&self, accounts: &[Account]) -> RunSummary {
        let mut summary = RunSummary::new();

        if accounts.is_empty() {
            error!("{}", no_accounts_message());
            return summary;
        }

        info!("Starting keep-alive run for {} account(s)", accounts.len());

        for (index, account) in accounts.iter().enumerate() {
            if index > 0 {
                sleep(self.account_spacing).await;
            }

            let result = self.attempter.attempt_login(account).await;
            summary.record(result);
        }

        log_summary(&summary);
        summary
    }
}

fn no_accounts_message() -> String {
    format!(
        "No accounts configured, set {} as 'username,password;username,password'",
        ACCOUNTS_VAR
    )
}

fn log_summary(summary: &RunSummary) {
    if summary.all_succeeded() {
        info!(
            "Keep-alive run finished: all {} account(s) succeeded",
            summary.success_count
        );
    } else {
        warn!(
            "Keep-alive run finished: {} succeeded, {} failed",
            summary.success_count, summary.fail_count
        );
    }

    for result in &summary.results {
        let line = describe_result(result);
        if result.success {
            info!("{}", line);
        } else {
            warn!("{}", line);
        }
    }

    debug!("Run summary: {}", summary_json(summary));
}

fn summary_json(summary: &RunSummary) -> String {
    serde_json::to_string(summary).unwrap_or_default()
}

fn describe_result(result: &AttemptResult) -> String {
    let status = if result.success { "OK" } else { "FAILED" };
    let mut line = format!("[{}] {}", result.username, status);

    if let Some(countdown) = &result.countdown {
        line.push_str(&format!(" - {}", countdown));
    }
    if let Some(err) = &result.error {
        line.push_str(&format!(" - {}", err));
    }
    line.push_str(&format!(" ({} attempt(s))", result.attempts));

    line
}

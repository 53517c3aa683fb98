use serde::Serialize;

use super::countdown::CountdownIndicator;
use crate::shared::LoginError;

/// Outcome of a single attempt, inspected by the retry loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded(CountdownIndicator),
    Retryable(LoginError),
    Terminal(LoginError),
}

impl AttemptOutcome {
    /// Route an error to the retryable or terminal arm
    pub fn from_error(error: LoginError) -> Self {
        if error.is_retryable() {
            AttemptOutcome::Retryable(error)
        } else {
            AttemptOutcome::Terminal(error)
        }
    }
}

/// Final result for one account in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptResult {
    pub username: String,
    pub success: bool,
    pub countdown: Option<String>,
    pub error: Option<String>,
    /// Full fetch/submit cycles performed, retries included
    pub attempts: u32,
}

impl AttemptResult {
    pub fn succeeded(username: &str, indicator: &CountdownIndicator, attempts: u32) -> Self {
        Self {
            username: username.to_string(),
            success: true,
            countdown: Some(indicator.detail()),
            error: None,
            attempts,
        }
    }

    pub fn failed(username: &str, error: &LoginError, attempts: u32) -> Self {
        Self {
            username: username.to_string(),
            success: false,
            countdown: None,
            error: Some(error.to_string()),
            attempts,
        }
    }
}

/// Accumulated results of a keep-alive run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub success_count: usize,
    pub fail_count: usize,
    pub results: Vec<AttemptResult>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized result and bump exactly one counter
    pub fn record(&mut self, result: AttemptResult) {
        if result.success {
            self.success_count += 1;
        } else {
            self.fail_count += 1;
        }
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.fail_count == 0
    }
}

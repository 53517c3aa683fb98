use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use keepalive_domain::account::{parse_accounts, ParsedAccounts};
use keepalive_infrastructure::config::TimeoutConfig;
use keepalive_infrastructure::http::DEFAULT_LOGIN_URL;

pub const ACCOUNTS_VAR: &str = "SITE_ACCOUNTS";
pub const LOGIN_URL_VAR: &str = "KEEPALIVE_LOGIN_URL";
pub const MAX_RETRIES_VAR: &str = "KEEPALIVE_MAX_RETRIES";
pub const LOG_DIR_VAR: &str = "KEEPALIVE_LOG_DIR";

const DEFAULT_MAX_RETRIES: u32 = 2;

/// Run configuration, read once at startup
#[derive(Debug)]
pub struct Settings {
    pub accounts: ParsedAccounts,
    pub login_url: Url,
    pub max_retries: u32,
    pub log_dir: Option<PathBuf>,
    pub timeouts: TimeoutConfig,
    /// Problems that fell back to a default, logged once logging is up
    pub warnings: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let accounts = parse_accounts(&lookup(ACCOUNTS_VAR).unwrap_or_default());

        let login_url_raw = non_empty(lookup(LOGIN_URL_VAR))
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());
        let login_url = Url::parse(&login_url_raw)
            .with_context(|| format!("Invalid {}: {}", LOGIN_URL_VAR, login_url_raw))?;

        let max_retries = match non_empty(lookup(MAX_RETRIES_VAR)) {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid {} value '{}', using {}",
                    MAX_RETRIES_VAR, raw, DEFAULT_MAX_RETRIES
                ));
                DEFAULT_MAX_RETRIES
            }),
            None => DEFAULT_MAX_RETRIES,
        };

        let log_dir = non_empty(lookup(LOG_DIR_VAR)).map(PathBuf::from);

        Ok(Self {
            accounts,
            login_url,
            max_retries,
            log_dir,
            timeouts: TimeoutConfig::default(),
            warnings,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Printable form of a rejected account entry that never shows a password
pub fn redact_entry(segment: &str) -> String {
    match segment.split_once(',') {
        Some((username, _)) => format!("{},***", username.trim()),
        None => {
            let prefix: String = segment.trim().chars().take(3).collect();
            format!("{}***", prefix)
        }
    }
}

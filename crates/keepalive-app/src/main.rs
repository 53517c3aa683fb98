use std::sync::Arc;

use anyhow::Result;
use log::warn;

use keepalive_infrastructure::http::{HttpLoginPortal, PortalConfig};
use keepalive_infrastructure::logging::{init_logger, LoggingOptions};
use keepalive_lib::application::config::{redact_entry, Settings};
use keepalive_lib::application::services::KeepAliveRunner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    init_logger(&LoggingOptions {
        log_dir: settings.log_dir.clone(),
    })?;

    for warning in &settings.warnings {
        warn!("{}", warning);
    }
    for entry in &settings.accounts.rejected {
        warn!("Ignoring malformed account entry: {}", redact_entry(entry));
    }

    let portal = Arc::new(HttpLoginPortal::new(PortalConfig::new(
        settings.login_url.clone(),
        settings.timeouts.http_request,
    )));

    let runner = KeepAliveRunner::new(portal, settings.max_retries, settings.timeouts.clone());
    runner.run(&settings.accounts.accounts).await;

    Ok(())
}

//! Logging setup
//!
//! - human-readable colored lines on stdout
//! - optional one-line JSON file log with daily rotation
//!
//! `log` macros used across the workspace are forwarded into `tracing`.
//! The filter comes from `RUST_LOG` and defaults to `info`.

mod format;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use log::LevelFilter;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use format::{HumanReadableFormatter, JsonFormatter};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "webhost-keepalive.log";
const DEFAULT_FILTER: &str = "info";

/// Where log output goes
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// Directory for the JSON file log; stdout only when `None`
    pub log_dir: Option<PathBuf>,
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(options: &LoggingOptions) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .event_format(HumanReadableFormatter::new(cfg!(debug_assertions)))
        .with_filter(build_filter());

    let file_layer = match &options.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .event_format(JsonFormatter::new())
                    .with_filter(build_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::debug!(
        target: "keepalive::logging",
        log_dir = ?options.log_dir,
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

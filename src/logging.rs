use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Base name of the daily rolling log file.
const LOG_FILE_NAME: &str = "bmi-tracker.log";

/// Route `tracing` output to a rolling file in `log_dir`. The TUI owns stdout
/// while it runs, so nothing is ever written to the terminal. The returned
/// guard flushes pending lines on drop and must outlive the event loop.
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(guard)
}

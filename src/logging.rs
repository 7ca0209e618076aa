//! Logging setup.
//!
//! The TUI owns the terminal, so its log goes to a file through a
//! non-blocking `tracing-appender` writer. Headless replays log to stdout,
//! where the per-render events are the whole point.

use crate::config::DemoConfig;
use crate::error::{InvalidSnafu, LogFileSnafu, LogFilterSnafu, Result};
use snafu::ResultExt;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set, the configured directive otherwise.
pub fn env_filter(config: &DemoConfig) -> Result<EnvFilter> {
    let directive =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.log_filter.clone());
    EnvFilter::try_new(&directive).context(LogFilterSnafu { filter: directive })
}

/// Send logs to `config.log_file`, appending.
///
/// Keep the returned guard alive until exit; dropping it flushes the writer.
pub fn init_file(config: &DemoConfig) -> Result<WorkerGuard> {
    let filter = env_filter(config)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .context(LogFileSnafu {
            path: &config.log_file,
        })?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| {
            InvalidSnafu {
                message: e.to_string(),
            }
            .build()
        })?;
    Ok(guard)
}

/// Send logs to stdout without timestamps, for replays.
pub fn init_stdout(config: &DemoConfig) -> Result<()> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init()
        .map_err(|e| {
            InvalidSnafu {
                message: e.to_string(),
            }
            .build()
        })
}

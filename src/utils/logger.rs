//! Logging initialization and configuration.
//!
//! Logs go to stderr by default so they never mix with results on stdout.
//! With a log directory, each run writes to its own timestamped file instead.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show every verdict
//! - `RUST_LOG=info` - Default
//! - `RUST_LOG=warn` - Denials and errors only
//! - `RUST_LOG=error` - Errors only

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// With `log_dir`, creates e.g. `logs/cmd-audit.2024-12-06-14-30-25.log` and
/// returns the guard that flushes the non-blocking writer; keep it alive until
/// exit. Without it, logs go to stderr and no guard is needed.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Default to "info" level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
        return Ok(None);
    };

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_path = log_dir.join(format!("cmd-audit.{}.log", timestamp));
    let log_file = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized - writing to {}", log_path.display());
    Ok(Some(guard))
}

//! Logging setup on top of `tracing`.
//!
//! The API client never writes output itself; it emits `tracing` events and
//! whichever subscriber the host process installs is the log sink. These
//! helpers install one for the CLI.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::error::{BsError, BsResult};

/// Name prefix of the daily log files.
const LOG_FILE_PREFIX: &str = "bookstack.log";

/// Keeps the background log writer alive. Dropping it flushes the file.
pub struct LogGuard {
    _guard: WorkerGuard,
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber: compact stderr output plus a daily-rotated
/// file in `log_dir`, plain text or JSON.
///
/// `level` accepts a bare level ("debug") or a filter directive
/// ("warn,bs_api=debug"). Fails if a subscriber is already installed.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> BsResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));

    let file_layer: Box<dyn Layer<Registry> + Send + Sync> = if json_output {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr).compact();

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(filter(level))
        .try_init()
        .map_err(|e| BsError::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!(filter = level, dir = %log_dir.display(), json_output, "logging initialized");

    Ok(LogGuard { _guard: guard })
}

/// Console-only logging for tests and one-off tools. Later calls are no-ops.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_is_idempotent() {
        init_console_logging("debug");
        init_console_logging("not a level");
    }
}

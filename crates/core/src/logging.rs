use crate::error::{Result, TestScopeError};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset: our crates at info, dependencies at warn.
pub const DEFAULT_FILTER: &str = "warn,testscope=info";

/// Directory holding the rolling log files, `~/.testscope/logs`.
pub fn log_dir() -> PathBuf {
    crate::config::base_dir().join("logs")
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber: a daily file named after `component`
/// (`cli.2024-01-21`) and, for long-running commands, stderr.
///
/// Fails when a subscriber is already installed.
pub fn init_logging(component: &str, to_stderr: bool) -> Result<WorkerGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| TestScopeError::Internal(format!("logging: {}", e)))?;

    Ok(guard)
}

//! Logging setup and command outcome logging

use std::time::Duration;

use gagso_domain::{GagsoError, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the configured level. Logs go to stderr so command
/// output on stdout stays machine-readable.
///
/// # Errors
///
/// Fails when the level is not a valid filter directive or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };
    installed.map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// `error_type` is `None` on success.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

/// Convert a `GagsoError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &GagsoError) -> &'static str {
    match error {
        GagsoError::Validation(_) => "validation",
        GagsoError::Auth(_) => "auth",
        GagsoError::NotFound(_) => "not_found",
        GagsoError::Network(_) => "network",
        GagsoError::Server(_) => "server",
        GagsoError::InvalidInput(_) => "invalid_input",
        GagsoError::Config(_) => "config",
        GagsoError::Internal(_) => "internal",
    }
}

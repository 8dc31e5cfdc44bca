//! Stderr logging bootstrap.
//!
//! `RUST_LOG` takes precedence over the configured level. The returned handle
//! must be kept alive for as long as logging is wanted.

use crate::error::TodoError;
use flexi_logger::{Logger, LoggerHandle};

/// Start the logger at `level` (`trace|debug|info|warn|error|off`).
pub fn init_logging(level: &str) -> Result<LoggerHandle, TodoError> {
    let level = normalize_level(level)?;
    Logger::try_with_env_or_str(level)
        .map_err(|e| TodoError::ConfigError(format!("invalid log level `{level}`: {e}")))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| TodoError::ConfigError(format!("failed to start logger: {e}")))
}

fn normalize_level(level: &str) -> Result<&'static str, TodoError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(TodoError::ConfigError(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}

//! Runtime configuration for core logging.
//!
//! # Invariants
//! - `level` is normalized to one of `trace|debug|info|warn|error`.
//! - `log_dir` is always an absolute path.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "HENRYFLIX_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "HENRYFLIX_LOG_DIR";

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: &'static str,
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    /// - Unsupported `level`.
    /// - Empty or relative `log_dir`.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Reads `HENRYFLIX_LOG_LEVEL` and `HENRYFLIX_LOG_DIR`.
    ///
    /// Returns `None` when no log directory is configured. A missing level
    /// falls back to `default_log_level()`.
    pub fn from_env() -> Option<Result<Self, String>> {
        let log_dir = std::env::var(ENV_LOG_DIR).ok()?;
        if log_dir.trim().is_empty() {
            return None;
        }
        let level =
            std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| default_log_level().to_string());
        Some(Self::new(&level, &log_dir))
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

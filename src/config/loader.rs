//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::level::{ParseSeverityError, Severity};

/// Overrides the configured level.
pub const ENV_LEVEL: &str = "CLOG_LEVEL";
/// Overrides `show_source_location`.
pub const ENV_SHOW_SOURCE_LOCATION: &str = "CLOG_SHOW_SOURCE_LOCATION";
/// Overrides `show_context_id`.
pub const ENV_SHOW_CONTEXT_ID: &str = "CLOG_SHOW_CONTEXT_ID";
/// Overrides `forward_metrics`.
pub const ENV_FORWARD_METRICS: &str = "CLOG_FORWARD_METRICS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {var}: {source}")]
    InvalidSeverity {
        var: &'static str,
        #[source]
        source: ParseSeverityError,
    },

    #[error("invalid {var}: '{value}' is not a boolean")]
    InvalidFlag { var: &'static str, value: String },
}

/// Load a TOML configuration file and apply environment overrides.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let mut config = load_file(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Load a TOML configuration file as written, without overrides.
pub fn load_file(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = read(path)?;
    Ok(toml::from_str(&content)?)
}

/// Like [`load_config`], but a blank file yields `None`.
///
/// Writers truncate before writing, so a blank file is treated as
/// mid-write rather than as a request for defaults.
pub fn load_nonblank_config(path: &Path) -> Result<Option<LoggerConfig>, ConfigError> {
    let content = read(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let mut config: LoggerConfig = toml::from_str(&content)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(Some(config))
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl LoggerConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }
}

/// Apply `CLOG_*` overrides read through `lookup`.
///
/// Unset and empty variables leave the field untouched.
pub fn apply_env_overrides<F>(config: &mut LoggerConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(raw) = get(ENV_LEVEL) {
        config.level = raw
            .parse::<Severity>()
            .map_err(|source| ConfigError::InvalidSeverity { var: ENV_LEVEL, source })?;
    }
    if let Some(raw) = get(ENV_SHOW_SOURCE_LOCATION) {
        config.show_source_location = parse_flag(ENV_SHOW_SOURCE_LOCATION, &raw)?;
    }
    if let Some(raw) = get(ENV_SHOW_CONTEXT_ID) {
        config.show_context_id = parse_flag(ENV_SHOW_CONTEXT_ID, &raw)?;
    }
    if let Some(raw) = get(ENV_FORWARD_METRICS) {
        config.forward_metrics = parse_flag(ENV_FORWARD_METRICS, &raw)?;
    }
    Ok(())
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}

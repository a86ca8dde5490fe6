//! The process-wide logger.
//!
//! Created on first use with default configuration, stdout and thread
//! context ids, unless [`set_logger`] installed another one first.

use std::path::Path;
use std::sync::OnceLock;

use notify::RecommendedWatcher;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{load_config, ConfigWatcher, LoggerConfig};
use crate::error::{ClogError, ClogResult};
use crate::level::Severity;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by the logging macros.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Install `logger` as the process-wide logger.
///
/// Fails once the global logger has been used or set.
pub fn set_logger(logger: Logger) -> ClogResult<()> {
    GLOBAL.set(logger).map_err(|_| ClogError::AlreadyInitialized)
}

/// Install a stdout logger configured from a TOML file plus `CLOG_*` overrides.
pub fn init_from_file(path: &Path) -> ClogResult<&'static Logger> {
    let config = load_config(path)?;
    set_logger(Logger::new(config))?;
    Ok(logger())
}

/// Install a stdout logger configured from `CLOG_*` environment variables.
pub fn init_from_env() -> ClogResult<&'static Logger> {
    let config = LoggerConfig::from_env()?;
    set_logger(Logger::new(config))?;
    Ok(logger())
}

/// Reload the process-wide logger's configuration whenever `path` changes.
///
/// Watching stops when the returned watcher is dropped.
pub fn watch_config(path: &Path) -> ClogResult<(RecommendedWatcher, UnboundedReceiver<LoggerConfig>)> {
    let (watcher, updates) = ConfigWatcher::new(path, logger().clone());
    Ok((watcher.run()?, updates))
}

pub fn set_minimum_severity(level: Severity) {
    logger().set_minimum_severity(level);
}

pub fn set_show_source_location(enabled: bool) {
    logger().set_show_source_location(enabled);
}

pub fn set_show_context_id(enabled: bool) {
    logger().set_show_context_id(enabled);
}

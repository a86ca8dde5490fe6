//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from setting up logging. Emission itself never fails.
#[derive(Debug, Error)]
pub enum ClogError {
    /// Loading or parsing configuration failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The config file watcher could not be started.
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// The process-wide logger was already in use or already replaced.
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// A global tracing subscriber was already installed.
    #[error("Tracing initialization error: {0}")]
    TracingInit(String),
}

/// Result type for clog setup operations.
pub type ClogResult<T> = Result<T, ClogError>;

//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_nonblank_config;
use crate::config::schema::LoggerConfig;
use crate::logger::Logger;

/// Monitors a configuration file and applies changes to a [`Logger`].
pub struct ConfigWatcher {
    path: PathBuf,
    logger: Logger,
    update_tx: mpsc::UnboundedSender<LoggerConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver that sees every applied configuration.
    pub fn new(path: &Path, logger: Logger) -> (Self, mpsc::UnboundedReceiver<LoggerConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                logger,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle stops the watch when dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self {
            path,
            logger,
            update_tx,
        } = self;
        let reload_path = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        match load_nonblank_config(&reload_path) {
                            Ok(None) => {
                                tracing::debug!(
                                    path = %reload_path.display(),
                                    "Config file is blank, waiting for content"
                                );
                            }
                            Ok(Some(new_config)) => {
                                tracing::info!(
                                    path = %reload_path.display(),
                                    level = %new_config.level,
                                    "Logger configuration reloaded"
                                );
                                logger.apply(new_config.clone());
                                let _ = update_tx.send(new_config);
                            }
                            Err(e) => {
                                tracing::error!(
                                    error = %e,
                                    "Failed to reload logger config, keeping current configuration"
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %path.display(), "Config watcher started");
        Ok(watcher)
    }
}

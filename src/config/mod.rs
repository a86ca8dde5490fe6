//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CLOG_* environment overrides
//!     → LoggerConfig
//!     → Logger::apply (atomic swap)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → Logger::apply
//!     → update sent to subscribers
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - A config that fails to load never replaces the active one
//! - A blank file is treated as mid-write and skipped
//! - Unknown keys are rejected so typos surface at load time

pub mod loader;
pub mod schema;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::LoggerConfig;
pub use watcher::ConfigWatcher;

//! Leveled, timestamped console logging.
//!
//! Every line carries a channel prefix, a UTC timestamp with millisecond
//! precision and, optionally, the call site and the calling thread:
//!
//! ```text
//! ❌ ERROR     [2024-03-01 08:05:09.007 UTC] [main.rs:42] (thread 1) Database operation failed: connection timeout
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use clog::Severity;
//!
//! clog::set_minimum_severity(Severity::Debug);
//! clog::init!("Starting application...");
//! clog::success!("Server started on port {}", 8080);
//! clog::metric!("active_connections", 42, "db=postgres", "host=primary");
//! ```
//!
//! # Severities
//! `Fatal < Error < Warning < Info < Debug < Trace`. A call is written when
//! its channel's severity is at or below the configured threshold.
//! Success, Init, Config and Metric filter as Info; Fatal always writes and
//! then panics.

pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod observability;

mod macros;

pub use config::{ConfigWatcher, LoggerConfig};
pub use error::{ClogError, ClogResult};
pub use global::{logger, set_logger, set_minimum_severity, set_show_context_id, set_show_source_location};
pub use level::{Channel, Severity};
pub use logger::{ContextId, ContextProvider, Logger, MemorySink, Sink, StdoutSink, ThreadContext};
pub use observability::{init_tracing, ClogLayer};

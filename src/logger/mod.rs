//! The logger subsystem.
//!
//! # Data Flow
//! ```text
//! channel call (info, error, metric, ...)
//!     → render_message (interpolate, never panics)
//!     → filter (channel severity vs threshold)
//!     → LogRecord (timestamp, file:line, context id)
//!     → render → Sink (one line)
//! ```
//!
//! # Design Decisions
//! - Configuration lives in an `ArcSwap`; readers take a snapshot per call
//! - Setters use read-copy-update, the last write wins
//! - Annotation lookups that fail drop the field instead of failing the call
//! - `fatal` bypasses the threshold, writes its line, then panics

pub mod context;
pub mod record;
pub mod sink;

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

use crate::config::LoggerConfig;
use crate::level::{Channel, Severity};
use crate::observability::metrics;

pub use context::{ContextId, ContextProvider, NoContext, ThreadContext};
pub use record::{LogRecord, SourceLocation};
pub use sink::{MemorySink, Sink, StdoutSink};

/// Leveled line logger.
///
/// Cloning is cheap; clones share configuration, sink and context provider.
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
}

struct Shared {
    config: ArcSwap<LoggerConfig>,
    sink: Arc<dyn Sink>,
    context: Arc<dyn ContextProvider>,
    /// Latest timestamp handed out, in Unix milliseconds.
    last_millis: AtomicI64,
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Arc<dyn Sink>,
    context: Arc<dyn ContextProvider>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: Arc::new(StdoutSink),
            context: Arc::new(ThreadContext),
        }
    }
}

impl LoggerBuilder {
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn context_provider(mut self, provider: impl ContextProvider + 'static) -> Self {
        self.context = Arc::new(provider);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            shared: Arc::new(Shared {
                config: ArcSwap::from_pointee(self.config),
                sink: self.sink,
                context: self.context,
                last_millis: AtomicI64::new(i64::MIN),
            }),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.shared.config.load())
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger writing to stdout with thread context ids.
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Snapshot of the current configuration.
    pub fn current_config(&self) -> LoggerConfig {
        (**self.shared.config.load()).clone()
    }

    /// Replace the whole configuration.
    pub fn apply(&self, config: LoggerConfig) {
        self.shared.config.store(Arc::new(config));
    }

    pub fn set_minimum_severity(&self, level: Severity) {
        self.update(|c| c.level = level);
    }

    pub fn set_show_source_location(&self, enabled: bool) {
        self.update(|c| c.show_source_location = enabled);
    }

    pub fn set_show_context_id(&self, enabled: bool) {
        self.update(|c| c.show_context_id = enabled);
    }

    pub fn set_forward_metrics(&self, enabled: bool) {
        self.update(|c| c.forward_metrics = enabled);
    }

    fn update(&self, f: impl Fn(&mut LoggerConfig)) {
        self.shared.config.rcu(|current| {
            let mut next = LoggerConfig::clone(current);
            f(&mut next);
            next
        });
    }

    /// Whether a call on `channel` would currently produce a line.
    pub fn enabled(&self, channel: Channel) -> bool {
        channel == Channel::Fatal || channel.severity().permits(self.shared.config.load().level)
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Info, args, Location::caller());
    }

    #[track_caller]
    pub fn success(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Success, args, Location::caller());
    }

    #[track_caller]
    pub fn init(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Init, args, Location::caller());
    }

    #[track_caller]
    pub fn config(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Config, args, Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Warning, args, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Error, args, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Debug, args, Location::caller());
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log_args(Channel::Trace, args, Location::caller());
    }

    /// Log regardless of threshold, then panic with the message.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let message = record::render_message(args);
        self.emit(
            Channel::Fatal,
            &message,
            Some(SourceLocation::from_caller(Location::caller())),
        );
        std::panic::panic_any(message)
    }

    /// Log `<name>: <value> [tags]` on the metric channel.
    ///
    /// With `forward_metrics` on, numeric values also update a gauge.
    #[track_caller]
    pub fn metric(&self, name: &str, value: impl fmt::Display, tags: &[&str]) {
        let config = self.shared.config.load();
        if config.forward_metrics {
            metrics::record_metric(name, &record::render_message(format_args!("{value}")), tags);
        }
        if !Channel::Metric.severity().permits(config.level) {
            return;
        }
        let message = record::render_metric(name, &value, tags);
        self.emit(
            Channel::Metric,
            &message,
            Some(SourceLocation::from_caller(Location::caller())),
        );
    }

    /// Emit an already-rendered message with an explicit location.
    ///
    /// Used by bridges that know the originating call site themselves.
    /// `Channel::Fatal` behaves like [`Logger::fatal`] and panics after writing.
    pub fn log_message(&self, channel: Channel, message: &str, location: Option<SourceLocation<'_>>) {
        if !self.enabled(channel) {
            return;
        }
        self.emit(channel, message, location);
        if channel == Channel::Fatal {
            std::panic::panic_any(message.to_string());
        }
    }

    fn log_args(&self, channel: Channel, args: fmt::Arguments<'_>, caller: &'static Location<'static>) {
        if !self.enabled(channel) {
            return;
        }
        let message = record::render_message(args);
        self.emit(channel, &message, Some(SourceLocation::from_caller(caller)));
    }

    fn emit(&self, channel: Channel, message: &str, location: Option<SourceLocation<'_>>) {
        let config = self.shared.config.load();
        let record = LogRecord {
            channel,
            message,
            timestamp: self.now(),
            location: location.filter(|_| config.show_source_location),
            context: if config.show_context_id {
                self.shared.context.current()
            } else {
                None
            },
        };
        let _ = self.shared.sink.write_line(&record.render());
    }

    // Never earlier than the previous record from this logger.
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let millis = now.timestamp_millis();
        let prev = self.shared.last_millis.fetch_max(millis, Ordering::AcqRel);
        if prev > millis {
            DateTime::from_timestamp_millis(prev).unwrap_or(now)
        } else {
            now
        }
    }
}

//! Bridge from the `tracing` ecosystem into clog lines.
//!
//! # Responsibilities
//! - Render tracing events through a [`Logger`]
//! - Install a global subscriber for applications that log through `tracing`
//!
//! # Design Decisions
//! - Level mapping: ERROR→Error, WARN→Warning, INFO→Info, DEBUG→Debug, TRACE→Trace
//! - The `message` field leads; other fields follow as `key=value`
//! - Call site comes from event metadata, not from the layer

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::ClogError;
use crate::level::Channel;
use crate::logger::{Logger, SourceLocation};

/// A `tracing_subscriber` layer that writes events as clog lines.
#[derive(Debug, Clone)]
pub struct ClogLayer {
    logger: Logger,
}

impl ClogLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

/// Channel used for events at `level`.
pub fn channel_for(level: &Level) -> Channel {
    match *level {
        Level::ERROR => Channel::Error,
        Level::WARN => Channel::Warning,
        Level::INFO => Channel::Info,
        Level::DEBUG => Channel::Debug,
        Level::TRACE => Channel::Trace,
    }
}

impl<S: Subscriber> Layer<S> for ClogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let channel = channel_for(meta.level());
        if !self.logger.enabled(channel) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location = match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => Some(SourceLocation { file, line }),
            _ => None,
        };
        self.logger.log_message(channel, &visitor.finish(), location);
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

/// Install a global subscriber that renders through `logger`.
///
/// Event filtering follows `RUST_LOG`, defaulting to `info`; the logger's
/// own threshold still applies on top.
pub fn init_tracing(logger: Logger) -> Result<(), ClogError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(ClogLayer::new(logger))
        .try_init()
        .map_err(|e| ClogError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::level::Severity;
    use crate::logger::{MemorySink, NoContext};

    fn bridged(level: Severity) -> (tracing::Dispatch, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .config(LoggerConfig::default().with_level(level))
            .sink(sink.clone())
            .context_provider(NoContext)
            .build();
        let subscriber = tracing_subscriber::registry().with(ClogLayer::new(logger));
        (tracing::Dispatch::new(subscriber), sink)
    }

    #[test]
    fn test_events_become_lines() {
        let (dispatch, sink) = bridged(Severity::Info);
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::warn!(backend = "db-1", retries = 3, "Slow response");
            tracing::debug!("hidden");
        });

        let lines = sink.take();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARNING"));
        assert!(lines[0].contains("[logging.rs:"));
        assert!(lines[0].ends_with(" Slow response backend=db-1 retries=3"), "{}", lines[0]);
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(channel_for(&Level::ERROR), Channel::Error);
        assert_eq!(channel_for(&Level::WARN), Channel::Warning);
        assert_eq!(channel_for(&Level::INFO), Channel::Info);
        assert_eq!(channel_for(&Level::DEBUG), Channel::Debug);
        assert_eq!(channel_for(&Level::TRACE), Channel::Trace);
    }

    #[test]
    fn test_fields_without_message() {
        let (dispatch, sink) = bridged(Severity::Trace);
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::trace!(queue_depth = 12);
        });

        assert!(sink.take()[0].ends_with(" queue_depth=12"));
    }
}

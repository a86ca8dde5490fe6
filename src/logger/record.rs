//! Per-call log records and line rendering.

use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::level::Channel;
use crate::logger::context::ContextId;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// File and line of the call that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl SourceLocation<'static> {
    pub fn from_caller(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl SourceLocation<'_> {
    /// `<basename>:<line>`, or `None` when the path has no file name.
    pub fn render(&self) -> Option<String> {
        let base = Path::new(self.file).file_name()?.to_str()?;
        Some(format!("{}:{}", base, self.line))
    }
}

/// A single emission, built and rendered once.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub channel: Channel,
    pub message: &'a str,
    pub timestamp: DateTime<Utc>,
    pub location: Option<SourceLocation<'a>>,
    pub context: Option<ContextId>,
}

impl LogRecord<'_> {
    /// Render the output line, without a trailing newline.
    ///
    /// `<prefix> [<timestamp>] [<file>:<line>] (<kind> <id>) <message>`
    pub fn render(&self) -> String {
        let mut line = String::with_capacity(64 + self.message.len());
        line.push_str(self.channel.prefix());
        line.push_str(" [");
        line.push_str(&format_timestamp(&self.timestamp));
        line.push(']');

        if let Some(loc) = self.location.as_ref().and_then(SourceLocation::render) {
            line.push_str(" [");
            line.push_str(&loc);
            line.push(']');
        }
        if let Some(ctx) = &self.context {
            let _ = write!(line, " ({ctx})");
        }

        line.push(' ');
        line.push_str(self.message);
        line
    }
}

/// UTC with millisecond precision, e.g. `2024-03-01 12:00:00.042 UTC`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Interpolate a message without ever panicking.
///
/// A `Display` impl that reports an error leaves whatever it wrote so far,
/// followed by a marker.
pub fn render_message(args: fmt::Arguments<'_>) -> String {
    if let Some(s) = args.as_str() {
        return s.to_string();
    }
    let mut out = String::new();
    if fmt::write(&mut out, args).is_err() {
        out.push_str("<formatting error>");
    }
    out
}

/// `<name>: <value>` plus ` [tag1, tag2]` when tags are present.
pub fn render_metric(name: &str, value: &dyn fmt::Display, tags: &[&str]) -> String {
    let mut out = String::new();
    if write!(out, "{name}: {value}").is_err() {
        out.push_str("<formatting error>");
    }
    if !tags.is_empty() {
        out.push_str(" [");
        out.push_str(&tags.join(", "));
        out.push(']');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 5, 9).unwrap() + chrono::Duration::milliseconds(7)
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(&fixed_time()), "2024-03-01 08:05:09.007 UTC");
    }

    #[test]
    fn test_full_line() {
        let record = LogRecord {
            channel: Channel::Error,
            message: "y=5",
            timestamp: fixed_time(),
            location: Some(SourceLocation { file: "src/handlers/users.rs", line: 42 }),
            context: Some(ContextId::new("thread", "3")),
        };
        assert_eq!(
            record.render(),
            "❌ ERROR     [2024-03-01 08:05:09.007 UTC] [users.rs:42] (thread 3) y=5"
        );
    }

    #[test]
    fn test_bare_line() {
        let record = LogRecord {
            channel: Channel::Info,
            message: "x",
            timestamp: fixed_time(),
            location: None,
            context: None,
        };
        let line = record.render();
        assert_eq!(line, "ℹ️  INFO      [2024-03-01 08:05:09.007 UTC] x");
        assert_eq!(line.matches('[').count(), 1);
        assert!(!line.contains('('));
    }

    #[test]
    fn test_location_without_file_name_is_dropped() {
        let record = LogRecord {
            channel: Channel::Debug,
            message: "m",
            timestamp: fixed_time(),
            location: Some(SourceLocation { file: "", line: 1 }),
            context: None,
        };
        assert!(!record.render().contains(":1]"));
    }

    #[test]
    fn test_render_message_survives_failing_display() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("half")?;
                Err(fmt::Error)
            }
        }

        assert_eq!(render_message(format_args!("y={}", 5)), "y=5");
        assert_eq!(render_message(format_args!("v={}", Broken)), "v=half<formatting error>");
    }

    #[test]
    fn test_metric_rendering() {
        assert_eq!(
            render_metric("latency_ms", &156.3, &["endpoint=/api/users"]),
            "latency_ms: 156.3 [endpoint=/api/users]"
        );
        assert_eq!(
            render_metric("active_connections", &42, &["db=postgres", "host=primary"]),
            "active_connections: 42 [db=postgres, host=primary]"
        );
        assert_eq!(render_metric("email_delivery_time_ms", &245.8, &[]), "email_delivery_time_ms: 245.8");
    }
}

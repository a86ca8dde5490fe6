//! Severities and emission channels.
//!
//! # Ordering
//! ```text
//! Fatal(0) < Error(1) < Warning(2) < Info(3) < Debug(4) < Trace(5)
//! ```
//! A record is emitted when its severity value is at or below the
//! configured threshold value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Urgency classification used for threshold filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable state; the caller is aborted after logging.
    Fatal = 0,
    /// Error conditions the application may survive.
    Error,
    /// Potentially harmful situations.
    Warning,
    /// General operational information.
    #[default]
    Info,
    /// Detailed debugging information.
    Debug,
    /// The most detailed debugging information.
    Trace,
}

impl Severity {
    /// All severities, most urgent first.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Whether a record of this severity passes the given threshold.
    pub fn permits(self, threshold: Severity) -> bool {
        self as u8 <= threshold as u8
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected fatal, error, warning, info, debug or trace)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" | "panic" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named emission kind with a fixed prefix and a severity binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Success,
    Init,
    Config,
    Warning,
    Error,
    Debug,
    Trace,
    Fatal,
    Metric,
}

impl Channel {
    /// Severity used when filtering this channel.
    ///
    /// Success, Init, Config and Metric all filter as Info.
    pub fn severity(self) -> Severity {
        match self {
            Channel::Info | Channel::Success | Channel::Init | Channel::Config | Channel::Metric => {
                Severity::Info
            }
            Channel::Warning => Severity::Warning,
            Channel::Error => Severity::Error,
            Channel::Debug => Severity::Debug,
            Channel::Trace => Severity::Trace,
            Channel::Fatal => Severity::Fatal,
        }
    }

    /// Bare label without decoration.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Info => "INFO",
            Channel::Success => "SUCCESS",
            Channel::Init => "INIT",
            Channel::Config => "CONFIG",
            Channel::Warning => "WARNING",
            Channel::Error => "ERROR",
            Channel::Debug => "DEBUG",
            Channel::Trace => "TRACE",
            Channel::Fatal => "PANIC",
            Channel::Metric => "METRIC",
        }
    }

    /// Decorated, fixed-width line prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Channel::Info => "ℹ️  INFO     ",
            Channel::Success => "✅ SUCCESS  ",
            Channel::Init => "🚀 INIT     ",
            Channel::Config => "⚙️  CONFIG   ",
            Channel::Warning => "⚠️  WARNING  ",
            Channel::Error => "❌ ERROR    ",
            Channel::Debug => "🔍 DEBUG    ",
            Channel::Trace => "📍 TRACE    ",
            Channel::Fatal => "💥 PANIC    ",
            Channel::Metric => "📊 METRIC   ",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

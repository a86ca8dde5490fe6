//! Configuration schema definitions.
//!
//! All fields have defaults so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::level::Severity;

/// Logger configuration.
///
/// ```toml
/// level = "debug"
/// show_source_location = true
/// show_context_id = false
/// forward_metrics = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Least urgent severity that is still emitted.
    pub level: Severity,

    /// Annotate lines with `[file:line]` of the call site.
    pub show_source_location: bool,

    /// Annotate lines with the calling thread or task.
    pub show_context_id: bool,

    /// Also publish numeric metric values through the `metrics` facade.
    pub forward_metrics: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            show_source_location: true,
            show_context_id: true,
            forward_metrics: false,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.show_source_location = enabled;
        self
    }

    pub fn with_context_id(mut self, enabled: bool) -> Self {
        self.show_context_id = enabled;
        self
    }

    pub fn with_forward_metrics(mut self, enabled: bool) -> Self {
        self.forward_metrics = enabled;
        self
    }
}

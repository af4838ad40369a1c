//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One logged event. Built once per log call and never mutated afterwards;
/// sinks receive it by reference and clone it when they need to keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    /// Logical subsystem that produced the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Call-site location, passed explicitly by the caller (see `log_here!`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LogEntry {
    /// Sanitize log text to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so every entry renders to exactly one line. Applied to the message
    /// and to both tags.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Local::now(),
            module: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(Self::sanitize_message(&module.into()));
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(Self::sanitize_message(&source.into()));
        self
    }

    /// Same event ignoring the creation time
    pub fn same_event(&self, other: &LogEntry) -> bool {
        self.level == other.level
            && self.message == other.message
            && self.module == other.module
            && self.source == other.source
    }
}

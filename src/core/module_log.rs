//! Per-module logging handle

use super::{log_entry::LogEntry, log_level::LogLevel, logger::LoggerInner};
use std::fmt;
use std::sync::Weak;

/// Forwards to the [`Logger`](super::Logger) that created it, tagging every
/// entry with the module name.
///
/// The handle does not keep the logger alive. Once the logger is dropped,
/// logging through the handle does nothing.
#[derive(Clone)]
pub struct ModuleLog {
    name: String,
    logger: Weak<LoggerInner>,
}

impl ModuleLog {
    pub(crate) fn new(name: String, logger: Weak<LoggerInner>) -> Self {
        Self { name, logger }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the originating logger still exists
    pub fn is_attached(&self) -> bool {
        self.logger.strong_count() > 0
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.dispatch(LogEntry::new(level, message));
    }

    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, source: impl Into<String>) {
        self.dispatch(LogEntry::new(level, message).with_source(source));
    }

    /// Dispatch a prepared entry; its module tag is replaced with this handle's name
    pub fn dispatch(&self, entry: LogEntry) {
        if let Some(logger) = self.logger.upgrade() {
            logger.dispatch(entry.with_module(self.name.as_str()));
        }
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn ann(&self, message: impl Into<String>) {
        self.log(LogLevel::Ann, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for ModuleLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleLog")
            .field("name", &self.name)
            .field("attached", &self.is_attached())
            .finish()
    }
}

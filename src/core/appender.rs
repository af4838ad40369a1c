//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};
use std::time::Duration;

/// A sink that consumes log entries.
///
/// Appenders are shared across calling threads, so implementations
/// synchronize internally and take `&self`.
pub trait Appender: Send + Sync {
    fn append(&self, entry: &LogEntry) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;

    /// Stop any background work and write out what is buffered.
    ///
    /// Returns `false` if that could not be completed within `timeout`.
    fn shutdown(&self, _timeout: Duration) -> bool {
        self.flush().is_ok()
    }
}

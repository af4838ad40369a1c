//! Construction-time configuration
//!
//! The crate does not read configuration files. `LoggerConfig` derives serde
//! traits so an application can embed it in its own settings.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default period of the file sink's flush loop
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file location. `None` disables the file sink entirely.
    pub file_path: Option<PathBuf>,
    /// Attach a console sink to the filtered path
    pub log_to_console: bool,
    /// Minimum level for the filtered path (inclusive)
    pub filter_threshold: LogLevel,
    pub flush_interval_ms: u64,
}

impl LoggerConfig {
    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            log_to_console: true,
            filter_threshold: LogLevel::Info,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL.as_millis() as u64,
        }
    }
}

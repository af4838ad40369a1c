//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod module_log;
pub mod output_format;

pub use appender::Appender;
pub use config::{LoggerConfig, DEFAULT_FLUSH_INTERVAL};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use module_log::ModuleLog;
pub use output_format::{EntryFormatter, LineFormat};

//! # Simple Logging System
//!
//! A small in-process logging facility. Each log call is stamped and fanned
//! out to two groups of appenders:
//!
//! - **Unfiltered**: every entry. The file sink lives here; it only enqueues,
//!   and a background thread appends queued entries to the log file in one
//!   batch per flush interval.
//! - **Filtered**: entries at or above the filter threshold. The colored
//!   console sink lives here.
//!
//! Module handles created with [`Logger::create_module`] tag entries with a
//! module name.
//!
//! ```no_run
//! use simple_logging_system::prelude::*;
//!
//! let logger = Logger::builder()
//!     .file_path("logs/log.txt")
//!     .filter_threshold(LogLevel::Warn)
//!     .build()?;
//!
//! logger.info("starting");
//! logger.warn("low disk");
//!
//! let net = logger.create_module("net");
//! net.error("connection refused");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, EntryFormatter, LineFormat, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, ModuleLog, Result, DEFAULT_FLUSH_INTERVAL,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, EntryFormatter, LineFormat, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ModuleLog, Result, DEFAULT_FLUSH_INTERVAL,
    DEFAULT_SHUTDOWN_TIMEOUT,
};

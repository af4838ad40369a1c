//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They accept either
//! a [`Logger`](crate::Logger) or a [`ModuleLog`](crate::ModuleLog).
//!
//! # Examples
//!
//! ```
//! use simple_logging_system::prelude::*;
//! use simple_logging_system::{info, warn};
//!
//! let logger = Logger::silent();
//! let db = logger.create_module("db");
//!
//! info!(logger, "Server started");
//! warn!(db, "Pool at {}% capacity", 90);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a message tagged with the call site (`file:line`).
///
/// The location is passed explicitly; the logger never inspects the caller.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::log_here;
/// log_here!(logger, LogLevel::Warn, "Retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! log_here {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format!($($arg)+), concat!(file!(), ":", line!()))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an announcement-level message.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::ann;
/// ann!(logger, "Listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! ann {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Ann, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use simple_logging_system::prelude::*;
/// # let logger = Logger::silent();
/// use simple_logging_system::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Appender, LogEntry, LogLevel, Logger, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<LogEntry>>>);

    impl Appender for Capture {
        fn append(&self, entry: &LogEntry) -> Result<()> {
            self.0.lock().push(entry.clone());
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn logger() -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::builder()
            .log_to_console(false)
            .appender(capture.clone())
            .build()
            .unwrap();
        (logger, capture)
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = logger();
        info!(logger, "Items: {}", 100);
        ann!(logger, "Ready");
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let entries = capture.0.lock();
        let levels: Vec<LogLevel> = entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert_eq!(entries[0].message, "Items: 100");
        assert_eq!(entries[2].message, "Retry 1 of 3");
    }

    #[test]
    fn test_macros_on_module_handle() {
        let (logger, capture) = logger();
        let db = logger.create_module("db");
        log!(db, LogLevel::Warn, "Pool at {}%", 90);

        let entries = capture.0.lock();
        assert_eq!(entries[0].module.as_deref(), Some("db"));
        assert_eq!(entries[0].message, "Pool at 90%");
    }

    #[test]
    fn test_log_here_records_location() {
        let (logger, capture) = logger();
        log_here!(logger, LogLevel::Info, "here");

        let entries = capture.0.lock();
        let source = entries[0].source.as_deref().unwrap();
        assert!(source.starts_with(file!()));
        assert!(source.contains(':'));
    }
}

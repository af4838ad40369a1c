//! Main logger implementation
//!
//! The logger fans every entry out on two paths. Unfiltered appenders (the
//! file sink first) see every entry; filtered appenders (the console first)
//! only see entries at or above the filter threshold. Both run inline on the
//! caller's thread, in registration order, unfiltered before filtered.

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    module_log::ModuleLog,
    output_format::EntryFormatter,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) struct LoggerInner {
    filter_threshold: RwLock<LogLevel>,
    unfiltered: Vec<Box<dyn Appender>>,
    filtered: Vec<Box<dyn Appender>>,
    modules: Mutex<Vec<String>>,
    metrics: Arc<LoggerMetrics>,
    file_path: Option<PathBuf>,
}

impl LoggerInner {
    pub(crate) fn dispatch(&self, entry: LogEntry) {
        self.metrics.record_logged();

        Self::fan_out(&self.unfiltered, &entry, &self.metrics);

        if entry.level >= *self.filter_threshold.read() {
            Self::fan_out(&self.filtered, &entry, &self.metrics);
        } else {
            self.metrics.record_filtered_out();
        }
    }

    /// Route an error raised by an unfiltered sink. It only goes to the
    /// filtered path so it can never be queued back into the failing sink.
    fn report_internal(&self, entry: LogEntry) {
        if entry.level >= *self.filter_threshold.read() {
            Self::fan_out(&self.filtered, &entry, &self.metrics);
        }
    }

    /// Invoke each appender with per-appender panic isolation
    ///
    /// A failing or panicking appender is reported on stderr; the remaining
    /// appenders still receive the entry.
    fn fan_out(appenders: &[Box<dyn Appender>], entry: &LogEntry, metrics: &LoggerMetrics) {
        for appender in appenders {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                    metrics.record_sink_error();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender '{}' panicked: {}. \
                         Other appenders continue to function.",
                        appender.name(),
                        panic_msg
                    );
                    metrics.record_sink_error();
                }
            }
        }
    }

    fn appenders(&self) -> impl Iterator<Item = &dyn Appender> + '_ {
        self.unfiltered
            .iter()
            .chain(self.filtered.iter())
            .map(|appender| appender.as_ref())
    }
}

pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    /// Console-only logger at the default threshold
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            LogLevel::Info,
            None,
            Vec::new(),
            vec![Box::new(ConsoleAppender::new())],
            Arc::new(LoggerMetrics::new()),
        )
    }

    /// Logger with no appenders at all
    #[must_use]
    pub fn silent() -> Self {
        Self::from_parts(
            LogLevel::Info,
            None,
            Vec::new(),
            Vec::new(),
            Arc::new(LoggerMetrics::new()),
        )
    }

    fn from_parts(
        threshold: LogLevel,
        file: Option<FileAppender>,
        extra_unfiltered: Vec<Box<dyn Appender>>,
        filtered: Vec<Box<dyn Appender>>,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<LoggerInner>| {
            let mut unfiltered: Vec<Box<dyn Appender>> = Vec::new();
            let mut file_path = None;

            if let Some(file) = file {
                let weak = weak.clone();
                file.set_error_reporter(Arc::new(move |entry| {
                    if let Some(inner) = weak.upgrade() {
                        inner.report_internal(entry);
                    }
                }));
                file_path = Some(file.path().to_path_buf());
                unfiltered.push(Box::new(file));
            }
            unfiltered.extend(extra_unfiltered);

            LoggerInner {
                filter_threshold: RwLock::new(threshold),
                unfiltered,
                filtered,
                modules: Mutex::new(Vec::new()),
                metrics,
                file_path,
            }
        });

        Self { inner }
    }

    /// Build a logger from construction-time settings
    ///
    /// # Errors
    ///
    /// Fails if the log directory cannot be created.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn filter_threshold(&self) -> LogLevel {
        *self.inner.filter_threshold.read()
    }

    pub fn set_filter_threshold(&self, level: LogLevel) {
        *self.inner.filter_threshold.write() = level;
    }

    /// Log file location, if the file sink is enabled
    pub fn file_path(&self) -> Option<&Path> {
        self.inner.file_path.as_deref()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.inner.dispatch(LogEntry::new(level, message));
    }

    /// Log on behalf of a module without creating a handle
    pub fn log_module(&self, level: LogLevel, message: impl Into<String>, module: impl Into<String>) {
        self.inner
            .dispatch(LogEntry::new(level, message).with_module(module));
    }

    /// Log with an explicit call-site location, usually via `log_here!`
    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, source: impl Into<String>) {
        self.inner
            .dispatch(LogEntry::new(level, message).with_source(source));
    }

    /// Dispatch a prepared entry as-is
    pub fn dispatch(&self, entry: LogEntry) {
        self.inner.dispatch(entry);
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

    /// Create a handle that tags everything it logs with `name`
    ///
    /// # Example
    ///
    /// ```
    /// use simple_logging_system::prelude::*;
    ///
    /// let logger = Logger::silent();
    /// let net = logger.create_module("net");
    /// net.warn("link down");
    /// assert_eq!(logger.modules(), vec!["net".to_string()]);
    /// ```
    pub fn create_module(&self, name: impl Into<String>) -> ModuleLog {
        let name = name.into();
        self.inner.modules.lock().push(name.clone());
        ModuleLog::new(name, Arc::downgrade(&self.inner))
    }

    /// Names of every module handle issued so far
    pub fn modules(&self) -> Vec<String> {
        self.inner.modules.lock().clone()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use simple_logging_system::Logger;
    ///
    /// let logger = Logger::silent();
    /// logger.info("hello");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.total_logged(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Flush every appender. For the file sink this runs one flush cycle
    /// on the calling thread.
    ///
    /// All appenders are flushed even if one fails; the first error is returned.
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for appender in self.inner.appenders() {
            if let Err(e) = appender.flush() {
                eprintln!("[LOGGER ERROR] Appender '{}' flush failed: {}", appender.name(), e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Gracefully shutdown the logger with a custom timeout
    ///
    /// Stops the file sink's flush loop, waits for its in-flight cycle and
    /// writes whatever is still queued. Entries logged afterwards no longer
    /// reach the file.
    ///
    /// # Returns
    ///
    /// `true` if every appender shut down cleanly within `timeout`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simple_logging_system::Logger;
    /// use std::time::Duration;
    ///
    /// let logger = Logger::builder().file_path("logs/app.log").build().unwrap();
    /// logger.info("Important message");
    ///
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(&self, timeout: Duration) -> bool {
        let mut clean = true;
        for appender in self.inner.appenders() {
            if !appender.shutdown(timeout) {
                clean = false;
            }
        }
        clean
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use simple_logging_system::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .filter_threshold(LogLevel::Warn)
    ///     .log_to_console(false)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let metrics = &self.inner.metrics;
        if metrics.sink_errors() > 0 || metrics.dropped() > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} sink errors and {} dropped file entries",
                metrics.sink_errors(),
                metrics.dropped()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use simple_logging_system::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .file_path("logs/app.log")
///     .filter_threshold(LogLevel::Warn)
///     .flush_interval(Duration::from_millis(100))
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    /// Exact interval, overriding the millisecond value in `config`
    flush_interval: Option<Duration>,
    console: Option<ConsoleAppender>,
    file_formatter: Option<EntryFormatter>,
    unfiltered: Vec<Box<dyn Appender>>,
    filtered: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            flush_interval: None,
            console: None,
            file_formatter: None,
            unfiltered: Vec::new(),
            filtered: Vec::new(),
        }
    }

    /// Replace all construction-time settings at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self.flush_interval = None;
        self
    }

    /// Enable the file sink
    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_to_console(mut self, enabled: bool) -> Self {
        self.config.log_to_console = enabled;
        self
    }

    /// Use a configured console appender instead of the default one
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.config.log_to_console = true;
        self.console = Some(console);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter_threshold(mut self, level: LogLevel) -> Self {
        self.config.filter_threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = Some(interval);
        self
    }

    /// Replace the detailed layout used by the file sink
    #[must_use = "builder methods return a new value"]
    pub fn file_formatter(mut self, formatter: EntryFormatter) -> Self {
        self.file_formatter = Some(formatter);
        self
    }

    /// Add an appender that receives every entry, after the file sink
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.unfiltered.push(Box::new(appender));
        self
    }

    /// Add an appender that only receives entries at or above the threshold,
    /// after the console
    #[must_use = "builder methods return a new value"]
    pub fn filtered_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.filtered.push(Box::new(appender));
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Fails if the file sink's directory cannot be created or its flush
    /// interval is zero. No logger is returned in that case.
    pub fn build(self) -> Result<Logger> {
        let metrics = Arc::new(LoggerMetrics::new());

        let file = match self.config.file_path {
            Some(ref path) => {
                let mut builder = FileAppender::builder(path)
                    .flush_interval(
                        self.flush_interval
                            .unwrap_or_else(|| self.config.flush_interval()),
                    )
                    .metrics(Arc::clone(&metrics));
                if let Some(formatter) = self.file_formatter {
                    builder = builder.formatter(formatter);
                }
                Some(builder.build()?)
            }
            None => None,
        };

        let mut filtered: Vec<Box<dyn Appender>> = Vec::new();
        if self.config.log_to_console {
            filtered.push(Box::new(self.console.unwrap_or_default()));
        }
        filtered.extend(self.filtered);

        Ok(Logger::from_parts(
            self.config.filter_threshold,
            file,
            self.unfiltered,
            filtered,
            metrics,
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

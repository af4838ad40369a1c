//! File appender implementation
//!
//! `append` only pushes the entry onto an unbounded queue. A background
//! thread drains the queue on a fixed interval and appends the whole batch
//! to the file in one write, opening and closing the file each cycle so
//! external truncation or rotation between cycles is tolerated.

use crate::core::{
    Appender, EntryFormatter, LineFormat, LogEntry, LogLevel, LoggerError, LoggerMetrics, Result,
    DEFAULT_FLUSH_INTERVAL, DEFAULT_SHUTDOWN_TIMEOUT,
};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Receives internal errors raised by the flush loop.
///
/// Whoever installs a reporter must not route the entry back into the
/// reporting file sink.
pub type ErrorReporter = Arc<dyn Fn(LogEntry) + Send + Sync>;

/// State shared between the appender and its flush thread
struct FlushState {
    path: PathBuf,
    receiver: Receiver<LogEntry>,
    /// Held across drain and write so batches reach the file in queue order
    cycle_lock: Mutex<()>,
    formatter: EntryFormatter,
    metrics: Arc<LoggerMetrics>,
    reporter: RwLock<Option<ErrorReporter>>,
}

impl FlushState {
    /// Drain everything queued right now and append it. Returns the number of
    /// entries written.
    fn flush_cycle(&self) -> Result<usize> {
        let guard = self.cycle_lock.lock();
        let expected = self.receiver.len();
        self.drain_and_write(guard, expected)
    }

    fn drain_and_write(&self, guard: MutexGuard<'_, ()>, expected: usize) -> Result<usize> {
        if expected == 0 {
            return Ok(0);
        }

        let mut batch = String::new();
        let mut received = 0;
        // Entries enqueued after `expected` was read stay for the next cycle.
        while received < expected {
            match self.receiver.try_recv() {
                Ok(entry) => {
                    batch.push_str(&(self.formatter)(&entry));
                    batch.push('\n');
                    received += 1;
                }
                Err(_) => break,
            }
        }
        self.metrics.record_flush_cycle();

        let written = if received == 0 {
            Ok(0)
        } else {
            self.append_batch(&batch, received)
        };
        drop(guard);

        if received < expected {
            self.metrics.record_queue_inconsistency();
            self.report(LoggerError::queue_inconsistent(expected, received));
        }

        written
    }

    fn append_batch(&self, batch: &str, entries: usize) -> Result<usize> {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(batch.as_bytes()));

        match result {
            Ok(()) => {
                self.metrics.record_written(entries);
                Ok(entries)
            }
            Err(e) => {
                // The batch is not re-queued.
                self.metrics.record_write_failure();
                self.metrics.record_dropped(entries);
                let err = LoggerError::file_write(self.path.display().to_string(), entries, e);
                eprintln!("[LOGGER ERROR] {}", err);
                Err(err)
            }
        }
    }

    fn report(&self, err: LoggerError) {
        eprintln!("[LOGGER ERROR] File sink: {}", err);

        let reporter = self.reporter.read().clone();
        if let Some(reporter) = reporter {
            reporter(LogEntry::new(LogLevel::Error, err.to_string()).with_module("file-sink"));
        }
    }
}

fn run_flush_loop(state: Arc<FlushState>, stop: Receiver<()>, interval: Duration) {
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                // Failures are reported inside the cycle.
                let _ = state.flush_cycle();
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let _ = state.flush_cycle();
}

/// Builder for [`FileAppender`]
pub struct FileAppenderBuilder {
    path: PathBuf,
    flush_interval: Duration,
    formatter: Option<EntryFormatter>,
    metrics: Option<Arc<LoggerMetrics>>,
}

impl FileAppenderBuilder {
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Replace the detailed line layout
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: EntryFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Record into shared metrics instead of a private instance
    #[must_use = "builder methods return a new value"]
    pub fn metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create the log directory and start the flush thread
    ///
    /// # Errors
    ///
    /// Fails if the interval is zero, the parent directory cannot be created,
    /// or the flush thread cannot be spawned.
    pub fn build(self) -> Result<FileAppender> {
        if self.flush_interval.is_zero() {
            return Err(LoggerError::config(
                "FileAppender",
                "flush interval must be greater than zero",
            ));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LoggerError::directory(parent.display().to_string(), e))?;
        }

        let (sender, receiver) = unbounded();
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let state = Arc::new(FlushState {
            path: self.path,
            receiver,
            cycle_lock: Mutex::new(()),
            formatter: self
                .formatter
                .unwrap_or_else(|| LineFormat::Detailed.formatter()),
            metrics: self.metrics.unwrap_or_default(),
            reporter: RwLock::new(None),
        });

        let state_clone = Arc::clone(&state);
        let interval = self.flush_interval;
        let handle = thread::Builder::new()
            .name("log-file-flusher".into())
            .spawn(move || run_flush_loop(state_clone, stop_rx, interval))
            .map_err(|e| LoggerError::io_operation("starting flush thread", "spawn failed", e))?;

        Ok(FileAppender {
            state,
            sender,
            stop: Mutex::new(Some(stop_tx)),
            worker: Mutex::new(Some(handle)),
            stopped: RwLock::new(false),
            flush_interval: interval,
        })
    }
}

pub struct FileAppender {
    state: Arc<FlushState>,
    sender: Sender<LogEntry>,
    stop: Mutex<Option<Sender<()>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    /// Held shared by appends so none slips past the final drain
    stopped: RwLock<bool>,
    flush_interval: Duration,
}

impl FileAppender {
    /// Open a file sink with the default flush interval
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// # Examples
    ///
    /// ```no_run
    /// use simple_logging_system::appenders::FileAppender;
    /// use std::time::Duration;
    ///
    /// let appender = FileAppender::builder("logs/app.log")
    ///     .flush_interval(Duration::from_millis(50))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder(path: impl Into<PathBuf>) -> FileAppenderBuilder {
        FileAppenderBuilder {
            path: path.into(),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            formatter: None,
            metrics: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.state.path
    }

    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    /// Entries waiting for the next flush cycle
    pub fn pending(&self) -> usize {
        self.state.receiver.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.state.metrics
    }

    pub fn set_error_reporter(&self, reporter: ErrorReporter) {
        *self.state.reporter.write() = Some(reporter);
    }
}

impl Appender for FileAppender {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let stopped = self.stopped.read();
        if *stopped {
            return Err(LoggerError::LoggerStopped);
        }

        self.sender
            .send(entry.clone())
            .map_err(|_| LoggerError::ChannelSendError)?;
        self.state.metrics.record_enqueued();
        Ok(())
    }

    /// Run one flush cycle on the calling thread
    fn flush(&self) -> Result<()> {
        self.state.flush_cycle().map(|_| ())
    }

    fn name(&self) -> &str {
        "file"
    }

    /// Stop the flush thread, wait up to `timeout` for its final cycle, then
    /// drain whatever arrived in between. Later appends are rejected.
    fn shutdown(&self, timeout: Duration) -> bool {
        {
            let mut stopped = self.stopped.write();
            if *stopped {
                return true;
            }
            *stopped = true;
        }

        // Disconnecting the stop channel wakes the loop.
        drop(self.stop.lock().take());

        let mut clean = true;
        if let Some(handle) = self.worker.lock().take() {
            if handle.thread().id() == thread::current().id() {
                // Dropped from inside the flush thread; it finishes on its own.
                return true;
            }

            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Flush thread panicked during shutdown: {:?}", e);
                        clean = false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Flush thread did not finish within {:?}. \
                         {} queued entries may be lost.",
                        timeout,
                        self.pending()
                    );
                    // A stuck cycle still holds the lock; never wait on it here.
                    if let Some(guard) = self.state.cycle_lock.try_lock() {
                        let expected = self.state.receiver.len();
                        let _ = self.state.drain_and_write(guard, expected);
                    }
                    return false;
                }

                thread::sleep(Duration::from_millis(5));
            }
        }

        self.state.flush_cycle().is_ok() && clean
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

#[cfg(test)]
impl FileAppender {
    /// Run one cycle as if the queue had reported `expected` entries
    pub(crate) fn drain_expecting(&self) -> impl Fn(usize) -> Result<usize> + Send + Sync {
        let state = Arc::clone(&self.state);
        move |expected| {
            let guard = state.cycle_lock.lock();
            state.drain_and_write(guard, expected)
        }
    }
}

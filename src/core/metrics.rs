//! Logger metrics for observability
//!
//! Counters for dispatch, filtering, sink failures and the file sink's
//! flush cycles. Shared between the dispatcher and the file sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use simple_logging_system::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_written(1);
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.written(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Entries passed to the dispatcher
    total_logged: AtomicU64,

    /// Entries that did not reach the filtered path
    filtered_out: AtomicU64,

    /// Sink calls that returned an error or panicked
    sink_errors: AtomicU64,

    /// Entries accepted by the file queue
    enqueued: AtomicU64,

    /// Entries appended to the log file
    written: AtomicU64,

    /// Entries lost to failed writes
    dropped: AtomicU64,

    /// Drain-and-write cycles that found work
    flush_cycles: AtomicU64,

    /// Batched writes that failed
    write_failures: AtomicU64,

    /// Drains that received fewer entries than the queue reported
    queue_inconsistencies: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            filtered_out: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
            enqueued: AtomicU64::new(0),
            written: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            flush_cycles: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            queue_inconsistencies: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_out(&self) -> u64 {
        self.filtered_out.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_cycles(&self) -> u64 {
        self.flush_cycles.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_inconsistencies(&self) -> u64 {
        self.queue_inconsistencies.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered_out(&self) -> u64 {
        self.filtered_out.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_error(&self) -> u64 {
        self.sink_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self, count: usize) -> u64 {
        self.written.fetch_add(count as u64, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self, count: usize) -> u64 {
        self.dropped.fetch_add(count as u64, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_flush_cycle(&self) -> u64 {
        self.flush_cycles.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_inconsistency(&self) -> u64 {
        self.queue_inconsistencies.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of enqueued file entries that were lost, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been enqueued.
    pub fn drop_rate(&self) -> f64 {
        let enqueued = self.enqueued();
        if enqueued == 0 {
            return 0.0;
        }
        (self.dropped() as f64 / enqueued as f64) * 100.0
    }
}

//! Criterion benchmarks for simple_logging_system

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use simple_logging_system::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn file_logger(dir: &TempDir, threshold: LogLevel) -> Logger {
    Logger::builder()
        .log_to_console(false)
        .filter_threshold(threshold)
        .file_path(dir.path().join("bench.log"))
        .build()
        .expect("Failed to build logger")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_file", |b| {
        b.iter(|| {
            let logger = Logger::silent();
            black_box(logger)
        });
    });

    let dir = TempDir::new().expect("Failed to create temp dir");
    group.bench_function("with_file", |b| {
        b.iter(|| {
            let logger = file_logger(&dir, LogLevel::Info);
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_file_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_enqueue");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = file_logger(&dir, LogLevel::Error);
    let module = logger.create_module("bench");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("module_warn", |b| {
        b.iter(|| {
            module.warn(black_box("Warning message"));
        });
    });

    group.finish();
}

fn bench_flush_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush_cycle");

    let dir = TempDir::new().expect("Failed to create temp dir");
    let appender = FileAppender::builder(dir.path().join("flush.log"))
        .flush_interval(Duration::from_secs(3600))
        .build()
        .expect("Failed to create appender");
    let entry = LogEntry::new(LogLevel::Info, "Batched message");

    for batch in [1usize, 100, 1000] {
        group.throughput(Throughput::Elements(batch as u64));
        group.bench_function(format!("batch_{}", batch), |b| {
            b.iter(|| {
                for _ in 0..batch {
                    appender.append(&entry).unwrap();
                }
                appender.flush().unwrap();
            });
        });
    }

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(file_logger(&dir, LogLevel::Error));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Warn, "Formatted message").with_module("net");

    group.bench_function("short", |b| {
        b.iter(|| black_box(LineFormat::Short.format(black_box(&entry))));
    });

    group.bench_function("detailed", |b| {
        b.iter(|| black_box(LineFormat::Detailed.format(black_box(&entry))));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .log_to_console(false)
        .filter_threshold(LogLevel::Warn)
        .build()
        .expect("Failed to build logger");

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.info(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should pass the filter"));
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_file_enqueue,
    bench_flush_cycle,
    bench_concurrent_logging,
    bench_formatting,
    bench_level_filtering
);

criterion_main!(benches);

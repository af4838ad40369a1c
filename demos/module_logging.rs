//! Module logging example
//!
//! Demonstrates per-module handles used from several threads, plus the
//! `log_here!` macro for call-site locations.
//!
//! Run with: cargo run --example module_logging

use simple_logging_system::prelude::*;
use simple_logging_system::{ann, log_here, warn};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Simple Logging System - Module Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .file_path("logs/modules.log")
            .console(ConsoleAppender::new().show_source(true))
            .filter_threshold(LogLevel::Ann)
            .build()?,
    );

    println!("1. Module handles on worker threads:");

    let mut handles = vec![];
    for worker in 0..3 {
        let module = logger.create_module(format!("worker-{}", worker));
        handles.push(thread::spawn(move || {
            for job in 0..5 {
                module.info(format!("Processing job {}", job));
            }
            ann!(module, "Finished {} jobs", 5);
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }

    println!("\n2. Call-site locations:");
    log_here!(logger, LogLevel::Warn, "Cache miss ratio at {}%", 42);
    warn!(logger, "Without a location");

    println!("\nModules created: {:?}", logger.modules());
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

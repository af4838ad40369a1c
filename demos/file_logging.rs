//! File logging example
//!
//! Every entry goes to the file; only warnings and errors reach the console.
//!
//! Run with: cargo run --example file_logging

use simple_logging_system::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Simple Logging System - File Logging Example ===\n");

    let logger = Logger::builder()
        .file_path("logs/application.log")
        .filter_threshold(LogLevel::Warn)
        .flush_interval(Duration::from_millis(200))
        .build()?;

    println!("1. Logging to file (all levels) and console (Warn and above):");

    logger.info("Application started");
    logger.info("Loading configuration...");
    logger.ann("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.info("Connecting to database...");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    // Stops the flush thread and writes everything still queued
    if !logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
        eprintln!("Logger did not shut down cleanly");
    }

    println!("\n=== Example completed successfully! ===");
    println!(
        "Check 'logs/application.log' for the full log output ({} entries written)",
        logger.metrics().written()
    );

    Ok(())
}

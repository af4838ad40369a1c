//! Basic logger usage example
//!
//! Demonstrates console logging, level colors and the filter threshold.
//!
//! Run with: cargo run --example basic_usage

use simple_logging_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Simple Logging System - Basic Usage Example ===\n");

    // Console only, no file sink
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.info("This is an info message");
    logger.ann("This is an announcement");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the filter threshold:");
    logger.set_filter_threshold(LogLevel::Warn);
    println!("   Threshold set to Warn - info and announcements won't show:");
    logger.info("Info message (hidden)");
    logger.ann("Announcement (hidden)");
    logger.warn("Warning message (visible)");
    logger.error("Error message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

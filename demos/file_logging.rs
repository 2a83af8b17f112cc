//! File logging example
//!
//! Demonstrates logging to the console, the output file and the error file.
//!
//! Run with: cargo run --example file_logging

use tinted_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tinted Logger - File Logging Example ===\n");

    let logger = Logger::new(LoggerConfig::new().with_log_name("FileDemo"))?;

    println!("1. Logging to console and files:");
    logger.info("Application started");
    logger.info("Configuration loaded successfully");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    if let (Some(output), Some(errors)) = (logger.output_path(), logger.error_path()) {
        println!("Check '{}' and '{}'", output.display(), errors.display());
    }

    Ok(())
}

//! Basic logger usage example
//!
//! Demonstrates console-only logging at the built-in levels.
//!
//! Run with: cargo run --example basic_usage

use serde_json::json;
use tinted_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tinted Logger - Basic Usage Example ===\n");

    // Console only, tagged with this file's name
    let logger = Logger::builder()
        .use_files(false)
        .use_log_name(true)
        .build()?;

    println!("1. Logging at the built-in levels:");
    logger.info("Information message :)");
    logger.warning("Warning message :/");
    logger.error("Error message :(");

    println!("\n2. Logging a structured value:");
    logger.info(json!({
        "str": "string",
        "num": 100,
        "bool": false,
        "obj": {}
    }));

    println!("\n3. Changing the log name:");
    logger.set_log_name(Some("Demo"));
    logger.info("Now tagged as Demo");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

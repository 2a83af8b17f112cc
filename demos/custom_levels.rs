//! Custom levels example
//!
//! Registers extra levels and logs them with caller-chosen colours.
//!
//! Run with: cargo run --example custom_levels

use tinted_logger::prelude::*;
use tinted_logger::log;

fn main() -> Result<()> {
    println!("=== Tinted Logger - Custom Levels Example ===\n");

    let logger = Logger::builder().use_files(false).build()?;

    let custom = logger.add_level("custom")?;
    let audit = logger.add_level("audit")?;

    logger.log("Custom message!", custom, Colour::Magenta)?;
    log!(logger, audit, Colour::Cyan, "User {} signed in", 42)?;

    println!("\nRegistered levels:");
    for (level, name) in logger.levels().iter() {
        println!("  {} => {}", level, name);
    }

    println!("\nLogging with an unregistered level:");
    if let Err(e) = logger.log("never printed", Level::from_index(99), Colour::Red) {
        logger.warning(format!("Rejected: {}", e));
    }

    Ok(())
}

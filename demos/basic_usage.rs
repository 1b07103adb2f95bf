//! Basic synchronous logging
//!
//! Demonstrates the synchronous logger with a console appender, level
//! filtering, and the detail threshold.
//!
//! Run with: cargo run --example basic_usage

use logpipe::prelude::*;

fn main() -> Result<()> {
    println!("=== logpipe - Basic Usage ===\n");

    let mut logger = SyncLogger::new();
    logger.add_appender(Box::new(ConsoleAppender::new()));

    println!("1. All levels (default config):");
    logger.debug("This is a debug message");
    logger.trace("This is a trace message");
    logger.info("This is an info message");
    logger.warn("This is a warning message (detailed from here up)");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Minimum level raised to INFO - debug and trace vanish:");
    logger.set_min_level(Level::Info);
    logger.debug("Debug message (hidden)");
    logger.trace("Trace message (hidden)");
    logger.info("Info message (visible)");

    println!("\n3. Detail threshold lowered to DEBUG - everything detailed:");
    logger.set_detail_level(Level::Debug);
    logger.info("Now rendered with the call site");

    println!("\n4. A category-tagged sibling over the same console:");
    let mut net = logger.sibling();
    net.set_formatter(CategoryFormatter::new("net"));
    net.info("Siblings share the sink set");
    net.error("And serialize on the same guard");

    println!("\n=== done ===");
    Ok(())
}

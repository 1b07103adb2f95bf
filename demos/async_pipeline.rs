//! The asynchronous pipeline end to end
//!
//! Builds a core with console and file destinations, attaches two loggers
//! with different formatters, logs from several threads, and shuts down
//! with a full drain.
//!
//! Run with: cargo run --example async_pipeline

use logpipe::prelude::*;
use logpipe::{error, info, warn};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== logpipe - Async Pipeline ===\n");

    let core = LogCore::builder()
        .console()
        .file("async_pipeline.log")?
        .start();

    let logger = Logger::new(Arc::clone(&core));
    let tagged = Logger::with_formatter(Arc::clone(&core), CategoryFormatter::new("worker"));

    println!("1. Two loggers, one core:");
    logger.info("plain logger speaking");
    tagged.info("tagged logger speaking");
    warn!(logger, "macros capture the call site too");

    println!("\n2. Concurrent producers:");
    let shared = Arc::new(logger);
    let mut handles = Vec::new();
    for thread_id in 0..4 {
        let logger = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            for i in 0..10 {
                info!(logger, "thread {} message {}", thread_id, i);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("producer thread");
    }
    error!(tagged, "one last record before shutdown");

    println!("\n3. Drain-complete shutdown:");
    core.stop();
    println!(
        "   delivered: {}, append errors: {}, dropped after stop: {}",
        core.metrics().delivered(),
        core.metrics().append_errors(),
        core.metrics().dropped_after_stop()
    );

    println!("\n=== done - see async_pipeline.log ===");
    Ok(())
}

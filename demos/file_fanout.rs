//! Multi-file fan-out and flush cadence
//!
//! Every record goes to every configured destination in registry order;
//! file sinks are flushed periodically while records flow.
//!
//! Run with: cargo run --example file_fanout

use logpipe::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== logpipe - File Fan-out ===\n");

    let core = LogCore::builder()
        .console()
        .file("fanout_a.log")?
        .file("fanout_b.log")?
        .flush_interval(Duration::from_millis(250))
        .start();
    let logger = Logger::new(Arc::clone(&core));

    println!("1. Fanning 50 records out to console + 2 files:");
    for i in 0..50 {
        logger.info(format!("record {}", i));
        thread::sleep(Duration::from_millis(20));
    }

    println!("\n2. Pipeline counters:");
    println!("   delivered:    {}", core.metrics().delivered());
    println!("   flush cycles: {}", core.metrics().flush_cycles());

    core.stop();
    println!("\n=== done - fanout_a.log and fanout_b.log are identical ===");
    Ok(())
}

//! End-to-end tests for the delivery pipeline
//!
//! These cover the pipeline's observable guarantees:
//! - FIFO delivery and drain-complete shutdown
//! - Level filtering with zero queue interaction
//! - Detail-threshold rendering through the whole pipeline
//! - Per-appender failure isolation
//! - Log injection prevention
//! - Flush cadence wiring and metrics accounting

use logpipe::{
    Appender, CategoryFormatter, LogCore, LogRecord, Logger, Level, PipelineError, Result,
    SyncLogger,
};
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

struct CollectingAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Appender for CollectingAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.lines.lock().push(record.text.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "collecting"
    }
}

struct FailingAppender;

impl Appender for FailingAppender {
    fn append(&mut self, _record: &LogRecord) -> Result<()> {
        Err(PipelineError::other("simulated disk full"))
    }

    fn flush(&mut self) -> Result<()> {
        Err(PipelineError::other("simulated disk full"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[test]
fn test_fifo_delivery_to_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("fifo.log");

    let core = LogCore::builder()
        .file(&log_file)
        .expect("open log file")
        .start();
    let logger = Logger::new(Arc::clone(&core));

    for i in 0..100 {
        logger.info(format!("message {}", i));
    }
    core.stop();

    let content = fs::read_to_string(&log_file).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);
    for (i, line) in lines.iter().enumerate() {
        assert!(
            line.ends_with(&format!("message {}", i)),
            "line {} out of order: {}",
            i,
            line
        );
    }
}

#[test]
fn test_drain_on_shutdown_loses_nothing() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("drain.log");

    let core = LogCore::builder()
        .file(&log_file)
        .expect("open log file")
        .start();
    let logger = Logger::new(Arc::clone(&core));

    // Burst-push and stop immediately; the worker must drain everything
    // before the stop() call returns.
    for i in 0..500 {
        logger.info(format!("burst {}", i));
    }
    core.stop();

    let content = fs::read_to_string(&log_file).expect("read log file");
    assert_eq!(content.lines().count(), 500);
    assert_eq!(core.metrics().delivered(), 500);
    assert_eq!(core.metrics().dropped_after_stop(), 0);
}

#[test]
fn test_level_filtering_scenario() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();
    let mut logger = Logger::new(Arc::clone(&core));
    logger.set_min_level(Level::Info);

    logger.debug("dropped");
    logger.warn("first kept");
    logger.error("second kept");
    core.stop();

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("WARN") && lines[0].contains("first kept"));
    assert!(lines[1].contains("ERROR") && lines[1].contains("second kept"));
}

#[test]
fn test_filtered_records_never_touch_the_queue() {
    // An idle core buffers every push, so queue length shows exactly what
    // the filter let through.
    let core = Arc::new(LogCore::builder().build());
    let mut logger = Logger::new(Arc::clone(&core));
    logger.set_min_level(Level::Warn);

    logger.debug("no allocation, no queue interaction");
    logger.info("same");
    assert_eq!(core.queue_len(), 0);

    logger.error("queued");
    assert_eq!(core.queue_len(), 1);
    core.stop();
}

#[test]
fn test_detail_threshold_end_to_end() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();
    let logger = Logger::new(Arc::clone(&core));

    logger.info("below threshold");
    logger.error("above threshold");
    core.stop();

    let lines = lines.lock();
    assert_eq!(lines[0], "[INFO]\tbelow threshold");
    assert!(lines[1].contains("integration_tests.rs"));
    assert!(lines[1].contains("above threshold"));
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("injection.log");

    let core = LogCore::builder()
        .file(&log_file)
        .expect("open log file")
        .start();
    let logger = Logger::new(Arc::clone(&core));

    logger.info("User login\n[ERROR]\tfake entry injected\nmore");
    core.stop();

    let content = fs::read_to_string(&log_file).expect("read log file");
    assert_eq!(content.lines().count(), 1, "one call, one line");
    assert!(content.contains("\\n"));
    assert!(!content.contains("\n[ERROR]"));
}

#[test]
fn test_appender_isolation() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(FailingAppender)
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();
    let logger = Logger::new(Arc::clone(&core));

    for i in 0..10 {
        logger.info(format!("resilient {}", i));
    }
    core.stop();

    // The healthy appender saw every record despite the broken one ahead
    // of it in registry order.
    assert_eq!(lines.lock().len(), 10);
    assert!(core.metrics().append_errors() >= 10);
    assert_eq!(core.metrics().delivered(), 10);
}

#[test]
fn test_file_appender_construction_error_is_synchronous() {
    let temp_dir = TempDir::new().expect("temp dir");

    // A directory cannot be opened for append; the builder reports it
    // before any core exists, so nothing is left partially running.
    let result = LogCore::builder().file(temp_dir.path());
    assert!(matches!(
        result.err(),
        Some(PipelineError::OpenAppender { .. })
    ));
}

#[test]
fn test_graceful_shutdown_on_drop() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("drop.log");

    {
        let core = LogCore::builder()
            .file(&log_file)
            .expect("open log file")
            .start();
        let logger = Logger::new(Arc::clone(&core));
        for i in 0..20 {
            logger.info(format!("pending {}", i));
        }
        drop(logger);
        // Last Arc drops here; Drop stops the core and drains the queue
    }

    let content = fs::read_to_string(&log_file).expect("read log file");
    assert_eq!(content.lines().count(), 20);
}

#[test]
fn test_flush_cadence_wiring() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("cadence.log");

    let core = LogCore::builder()
        .file(&log_file)
        .expect("open log file")
        .flush_interval(Duration::from_millis(10))
        .start();
    let logger = Logger::new(Arc::clone(&core));

    // Flushes only happen while records flow, so keep them flowing past
    // a few interval boundaries.
    for i in 0..5 {
        logger.info(format!("tick {}", i));
        thread::sleep(Duration::from_millis(20));
    }
    logger.info("final");
    thread::sleep(Duration::from_millis(50));

    assert!(
        core.metrics().flush_cycles() >= 1,
        "expected at least one periodic flush, got {}",
        core.metrics().flush_cycles()
    );
    core.stop();
}

#[test]
fn test_multiple_loggers_share_one_core() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();

    let plain = Logger::new(Arc::clone(&core));
    let tagged = Logger::with_formatter(Arc::clone(&core), CategoryFormatter::new("worker"));

    plain.info("from the plain logger");
    tagged.info("from the tagged logger");
    core.stop();

    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[INFO]\tfrom the plain logger");
    assert_eq!(lines[1], "[INFO] worker: from the tagged logger");
}

#[test]
fn test_logging_after_stop_is_accounted() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();
    let logger = Logger::new(Arc::clone(&core));

    logger.info("delivered");
    core.stop();

    logger.info("too late");
    logger.info("also too late");

    assert_eq!(lines.lock().len(), 1);
    assert_eq!(core.metrics().dropped_after_stop(), 2);
}

#[test]
fn test_concurrent_producers_preserve_per_thread_order() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let core = LogCore::builder()
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .start();
    let logger = Arc::new(Logger::new(Arc::clone(&core)));

    let mut producers = Vec::new();
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        producers.push(thread::spawn(move || {
            for i in 0..50 {
                logger.info(format!("thread {} message {:03}", thread_id, i));
            }
        }));
    }
    for producer in producers {
        producer.join().unwrap();
    }
    core.stop();

    let lines = lines.lock();
    assert_eq!(lines.len(), 200);

    // Records pushed by one producer must come out in that producer's
    // push order, whatever the interleaving across threads.
    for thread_id in 0..4 {
        let tag = format!("thread {} ", thread_id);
        let own: Vec<&String> = lines.iter().filter(|l| l.contains(&tag)).collect();
        assert_eq!(own.len(), 50);
        let mut sorted = own.clone();
        sorted.sort();
        assert_eq!(own, sorted, "thread {} records reordered", thread_id);
    }
}

#[test]
fn test_sync_logger_serializes_concurrent_writers() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Arc::new(SyncLogger::new());
    logger.add_appender(Box::new(CollectingAppender {
        lines: Arc::clone(&lines),
    }));

    let mut writers = Vec::new();
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        writers.push(thread::spawn(move || {
            for i in 0..25 {
                logger.info(format!("sync {} {}", thread_id, i));
            }
        }));
    }
    for writer in writers {
        writer.join().unwrap();
    }

    let lines = lines.lock();
    assert_eq!(lines.len(), 100);
    // Every line is one intact record; the exclusion guard never lets
    // two caller-thread writes interleave.
    for line in lines.iter() {
        assert!(line.starts_with("[INFO]\tsync "), "corrupt line: {}", line);
    }
    assert_eq!(logger.metrics().delivered(), 100);
}

#[test]
fn test_fanout_to_console_and_files() {
    let temp_dir = TempDir::new().expect("temp dir");
    let file_a = temp_dir.path().join("a.log");
    let file_b = temp_dir.path().join("b.log");

    let core = LogCore::builder()
        .file(&file_a)
        .expect("open a.log")
        .file(&file_b)
        .expect("open b.log")
        .start();
    let logger = Logger::new(Arc::clone(&core));

    logger.info("everywhere");
    core.stop();

    let content_a = fs::read_to_string(&file_a).expect("read a.log");
    let content_b = fs::read_to_string(&file_b).expect("read b.log");
    assert_eq!(content_a, content_b);
    assert!(content_a.contains("everywhere"));
}

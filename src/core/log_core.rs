//! The asynchronous delivery core: worker thread, fan-out, flush policy

use super::appender::{fan_out, flush_all, Appender};
use super::error::{panic_message, Result};
use super::flush::{FlushPolicy, DEFAULT_FLUSH_INTERVAL};
use super::metrics::CoreMetrics;
use super::queue::MessageQueue;
use super::record::LogRecord;
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Lifecycle of a [`LogCore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreState {
    /// Constructed, worker not running. Records pushed now are buffered.
    Idle,
    /// Worker thread active, draining the queue.
    Running,
    /// Shutdown signaled, worker draining the remaining buffered records.
    Stopping,
    /// Worker joined. Terminal.
    Stopped,
}

const STATE_IDLE: u8 = 0;
const STATE_RUNNING: u8 = 1;
const STATE_STOPPING: u8 = 2;
const STATE_STOPPED: u8 = 3;

fn state_from_u8(raw: u8) -> CoreState {
    match raw {
        STATE_IDLE => CoreState::Idle,
        STATE_RUNNING => CoreState::Running,
        STATE_STOPPING => CoreState::Stopping,
        _ => CoreState::Stopped,
    }
}

/// Owns the queue and the appender registry; runs the dedicated worker
/// thread that pops records, fans them out to every appender in registry
/// order, and periodically flushes file-backed sinks.
///
/// Lifecycle: `Idle` → (`run`) → `Running` → (`stop`/drop) → `Stopping` →
/// `Stopped`. `run()` moves the registry into the worker thread, so the
/// appender set cannot be mutated while the worker iterates it. `stop()`
/// signals shutdown, waits for the drain to complete, and joins the worker;
/// appenders are destroyed inside the worker as it returns, before the join
/// completes.
///
/// # Example
///
/// ```no_run
/// use logpipe::{LogCore, Logger};
///
/// let core = LogCore::builder()
///     .console()
///     .file("app.log")?
///     .start();
/// let logger = Logger::new(core.clone());
/// logger.info("pipeline up");
/// core.stop();
/// # Ok::<(), logpipe::PipelineError>(())
/// ```
pub struct LogCore {
    queue: Arc<MessageQueue>,
    state: AtomicU8,
    registry: Vec<Box<dyn Appender>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    flush_interval: Duration,
    metrics: Arc<CoreMetrics>,
}

impl LogCore {
    #[must_use]
    pub fn builder() -> LogCoreBuilder {
        LogCoreBuilder::new()
    }

    fn with_appenders(registry: Vec<Box<dyn Appender>>, flush_interval: Duration) -> Self {
        Self {
            queue: Arc::new(MessageQueue::new()),
            state: AtomicU8::new(STATE_IDLE),
            registry,
            worker: Mutex::new(None),
            flush_interval,
            metrics: Arc::new(CoreMetrics::new()),
        }
    }

    /// Add an appender to the registry.
    ///
    /// # Panics
    ///
    /// Panics if the worker has already been started; the registry is
    /// structurally fixed once `run()` moves it into the worker thread.
    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        assert_eq!(
            self.state(),
            CoreState::Idle,
            "appenders can only be added before LogCore::run()"
        );
        self.registry.push(appender);
    }

    /// Spawn the worker thread and transition to `Running`.
    ///
    /// # Panics
    ///
    /// Panics if called on a core that is not idle; starting the worker
    /// twice is a programmer error.
    pub fn run(&mut self) {
        let transitioned = self
            .state
            .compare_exchange(STATE_IDLE, STATE_RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        assert!(transitioned, "LogCore::run() called on a core that is not idle");

        let appenders = std::mem::take(&mut self.registry);
        let queue = Arc::clone(&self.queue);
        let metrics = Arc::clone(&self.metrics);
        let flush_interval = self.flush_interval;

        let handle = thread::Builder::new()
            .name("logpipe-worker".into())
            .spawn(move || worker_loop(&queue, appenders, &metrics, flush_interval))
            .expect("failed to spawn logpipe worker thread");
        *self.worker.lock() = Some(handle);
    }

    /// Signal shutdown, drain the queue, and join the worker. Idempotent;
    /// concurrent callers serialize on the join and all return only after
    /// every record pushed before the shutdown was observed has been
    /// delivered.
    pub fn stop(&self) {
        // A core that never ran has no drain to wait for; buffered records
        // are undeliverable and swept into the late-drop counter.
        if self
            .state
            .compare_exchange(STATE_IDLE, STATE_STOPPED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.queue.shutdown();
            self.account_late_drops(self.queue.clear());
            return;
        }

        // Whichever caller wins the CAS transitions the state; every caller
        // signals shutdown (idempotent) and then serializes on the worker
        // mutex. The handle is taken and joined, and `Stopped` published,
        // inside one critical section, so a caller that finds the handle
        // already gone can only be running after the drain completed.
        let _ = self.state.compare_exchange(
            STATE_RUNNING,
            STATE_STOPPING,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        self.queue.shutdown();

        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            if let Err(panic) = handle.join() {
                eprintln!(
                    "[LOGPIPE ERROR] worker thread panicked: {}",
                    panic_message(panic.as_ref())
                );
            }
            // Anything still queued raced in after the worker finished its
            // drain; account for it rather than silently discarding.
            self.account_late_drops(self.queue.clear());
            self.state.store(STATE_STOPPED, Ordering::Release);
        }
    }

    /// Enqueue a rendered record for asynchronous delivery.
    ///
    /// Records pushed while the core is still idle are buffered and
    /// delivered once `run()` starts. Records pushed after `stop()` cannot
    /// be delivered; they are counted in `dropped_after_stop` and the first
    /// occurrence is reported to the diagnostic channel.
    pub fn push(&self, record: LogRecord) {
        match self.state() {
            CoreState::Idle | CoreState::Running => self.queue.push(record),
            CoreState::Stopping | CoreState::Stopped => {
                if self.metrics.record_dropped_after_stop() == 0 {
                    eprintln!(
                        "[LOGPIPE ERROR] record logged after stop; dropping (level {})",
                        record.level
                    );
                }
            }
        }
    }

    pub fn state(&self) -> CoreState {
        state_from_u8(self.state.load(Ordering::Acquire))
    }

    /// Number of records currently buffered in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn metrics(&self) -> &CoreMetrics {
        &self.metrics
    }

    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    fn account_late_drops(&self, count: usize) {
        for _ in 0..count {
            if self.metrics.record_dropped_after_stop() == 0 {
                eprintln!("[LOGPIPE ERROR] records left undelivered at stop; dropping");
            }
        }
    }
}

impl Drop for LogCore {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop body: pop one record, fan it out in registry order, then
/// poll the flush policy. Returns (dropping the appenders) once the queue
/// reports closed, after a final flush.
fn worker_loop(
    queue: &MessageQueue,
    mut appenders: Vec<Box<dyn Appender>>,
    metrics: &CoreMetrics,
    flush_interval: Duration,
) {
    let mut policy = FlushPolicy::new(flush_interval);

    while let Some(record) = queue.pop() {
        fan_out(&mut appenders, &record, metrics);
        metrics.record_delivered();

        if policy.poll(Instant::now()) {
            flush_all(&mut appenders, metrics);
            metrics.record_flush_cycle();
        }
    }

    // Drain complete; persist everything before the appenders are dropped.
    flush_all(&mut appenders, metrics);
}

/// Fluent construction surface for [`LogCore`].
///
/// # Example
///
/// ```no_run
/// use logpipe::LogCore;
/// use std::time::Duration;
///
/// let core = LogCore::builder()
///     .console()
///     .file("app.log")?
///     .flush_interval(Duration::from_secs(5))
///     .start();
/// # Ok::<(), logpipe::PipelineError>(())
/// ```
pub struct LogCoreBuilder {
    appenders: Vec<Box<dyn Appender>>,
    flush_interval: Duration,
}

impl LogCoreBuilder {
    pub fn new() -> Self {
        Self {
            appenders: Vec::new(),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }

    /// Add a colored console destination.
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self) -> Self {
        self.appenders.push(Box::new(ConsoleAppender::new()));
        self
    }

    /// Add an append-mode file destination.
    ///
    /// Fails here, synchronously, if the path cannot be opened for append;
    /// a broken destination is never deferred to the worker.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        self.appenders.push(Box::new(FileAppender::new(path)?));
        Ok(self)
    }

    /// Add a custom appender.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Override the periodic flush interval for file-backed appenders.
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Build an idle core; call `run()` to start the worker.
    pub fn build(self) -> LogCore {
        LogCore::with_appenders(self.appenders, self.flush_interval)
    }

    /// Build the core, start its worker, and wrap it for sharing.
    pub fn start(self) -> Arc<LogCore> {
        let mut core = self.build();
        core.run();
        Arc::new(core)
    }
}

impl Default for LogCoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Periodic flush bookkeeping for the worker loop

use std::time::{Duration, Instant};

/// Default interval between periodic flushes of file-backed appenders.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(10);

/// Tracks when the file-backed appenders are due for a flush.
///
/// The worker calls `poll(Instant::now())` once per loop iteration after
/// fan-out; flush latency is therefore bounded by the record arrival rate
/// (an idle pipeline has nothing new to persist). Tests drive `poll` with
/// synthetic instants.
#[derive(Debug)]
pub struct FlushPolicy {
    interval: Duration,
    last_flush: Instant,
}

impl FlushPolicy {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Construct with an explicit start-of-interval marker.
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_flush: start,
        }
    }

    /// Returns true and resets the marker when a full interval has elapsed
    /// since the last flush.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_flush) >= self.interval {
            self.last_flush = now;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FlushPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FLUSH_INTERVAL)
    }
}

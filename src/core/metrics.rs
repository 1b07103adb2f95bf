//! Pipeline counters for observability
//!
//! Tracks delivery, per-appender failures, flush rounds, and records that
//! arrived too late to be delivered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters shared between the worker thread and embedding code.
///
/// # Example
///
/// ```
/// use logpipe::CoreMetrics;
///
/// let metrics = CoreMetrics::new();
/// metrics.record_delivered();
/// assert_eq!(metrics.delivered(), 1);
/// ```
#[derive(Debug)]
pub struct CoreMetrics {
    /// Records fanned out to the appender registry
    delivered: AtomicU64,

    /// Isolated per-appender append/flush failures, panics included
    append_errors: AtomicU64,

    /// Periodic flush rounds performed by the worker
    flush_cycles: AtomicU64,

    /// Records dropped because they arrived after stop
    dropped_after_stop: AtomicU64,
}

impl CoreMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            append_errors: AtomicU64::new(0),
            flush_cycles: AtomicU64::new(0),
            dropped_after_stop: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn append_errors(&self) -> u64 {
        self.append_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_cycles(&self) -> u64 {
        self.flush_cycles.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_after_stop(&self) -> u64 {
        self.dropped_after_stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_append_error(&self) -> u64 {
        self.append_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_flush_cycle(&self) -> u64 {
        self.flush_cycles.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a late drop; returns the previous count so callers can report
    /// the first occurrence.
    #[inline]
    pub fn record_dropped_after_stop(&self) -> u64 {
        self.dropped_after_stop.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.append_errors.store(0, Ordering::Relaxed);
        self.flush_cycles.store(0, Ordering::Relaxed);
        self.dropped_after_stop.store(0, Ordering::Relaxed);
    }
}

impl Default for CoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CoreMetrics {
    /// Create a snapshot of the current counter values.
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered()),
            append_errors: AtomicU64::new(self.append_errors()),
            flush_cycles: AtomicU64::new(self.flush_cycles()),
            dropped_after_stop: AtomicU64::new(self.dropped_after_stop()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = CoreMetrics::new();
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.append_errors(), 0);
        assert_eq!(metrics.flush_cycles(), 0);
        assert_eq!(metrics.dropped_after_stop(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = CoreMetrics::new();
        assert_eq!(metrics.record_dropped_after_stop(), 0);
        assert_eq!(metrics.record_dropped_after_stop(), 1);
        assert_eq!(metrics.dropped_after_stop(), 2);
    }

    #[test]
    fn test_reset() {
        let metrics = CoreMetrics::new();
        metrics.record_delivered();
        metrics.record_append_error();
        metrics.record_flush_cycle();
        metrics.reset();
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.append_errors(), 0);
        assert_eq!(metrics.flush_cycles(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = CoreMetrics::new();
        metrics.record_delivered();
        metrics.record_delivered();

        let snapshot = metrics.clone();
        metrics.record_delivered();

        assert_eq!(snapshot.delivered(), 2);
        assert_eq!(metrics.delivered(), 3);
    }
}

//! Thread-safe hand-off buffer between producers and the worker

use super::record::LogRecord;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

struct Inner {
    items: VecDeque<LogRecord>,
    shutdown: bool,
}

/// FIFO hand-off buffer between any number of producer threads and one
/// consumer, with a one-way shutdown signal.
///
/// `push` never blocks and never fails; `pop` blocks the consumer until a
/// record is available or shutdown has been signaled with nothing left to
/// drain. Once shutdown is set, `pop` keeps returning buffered records in
/// FIFO order and reports closed (`None`) only after the queue is empty —
/// buffered records are never lost to shutdown.
pub struct MessageQueue {
    inner: Mutex<Inner>,
    available: Condvar,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                shutdown: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Enqueue a record and wake the consumer if it is waiting.
    ///
    /// Accepted even after `shutdown()`; producers may race the shutdown
    /// signal and the queue itself never rejects a record.
    pub fn push(&self, record: LogRecord) {
        let mut inner = self.inner.lock();
        inner.items.push_back(record);
        self.available.notify_one();
    }

    /// Block until a record is available or the queue is closed.
    ///
    /// Returns `None` only once shutdown has been signaled AND the queue is
    /// empty; anything still buffered is drained first.
    pub fn pop(&self) -> Option<LogRecord> {
        let mut inner = self.inner.lock();
        loop {
            if let Some(record) = inner.items.pop_front() {
                return Some(record);
            }
            if inner.shutdown {
                return None;
            }
            self.available.wait(&mut inner);
        }
    }

    /// Signal shutdown and wake any blocked consumer. Idempotent.
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock();
        inner.shutdown = true;
        self.available.notify_all();
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.lock().shutdown
    }

    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    /// Discard any buffered records, returning how many were removed.
    ///
    /// Used after the worker has been joined to account for records that
    /// raced into the queue past the drain.
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.lock();
        let discarded = inner.items.len();
        inner.items.clear();
        discarded
    }
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

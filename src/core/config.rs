//! Per-logger configuration

use super::level::Level;
use serde::{Deserialize, Serialize};

/// Per-Logger filtering and rendering thresholds.
///
/// `min_level` gates whether a record is produced at all; `detail_level`
/// selects whether it is rendered with call-site detail or in compact form.
/// Each `Logger` owns its config exclusively; reconfiguring a logger that is
/// shared between threads requires external synchronization (the setters take
/// `&mut self`).
///
/// # Examples
///
/// ```
/// use logpipe::{Level, LoggerConfig};
///
/// let config = LoggerConfig::new()
///     .with_min_level(Level::Info)
///     .with_detail_level(Level::Error);
/// assert!(config.enabled(Level::Warn));
/// assert!(!config.enabled(Level::Debug));
/// assert!(config.wants_detail(Level::Fatal));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Records below this level are discarded before any formatting.
    pub min_level: Level,
    /// Records at or above this level render with call-site detail.
    pub detail_level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Debug,
            detail_level: Level::Warn,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_detail_level(mut self, level: Level) -> Self {
        self.detail_level = level;
        self
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.min_level = level;
    }

    pub fn set_detail_level(&mut self, level: Level) {
        self.detail_level = level;
    }

    /// Whether a record at `level` passes the minimum-level filter.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Whether a record at `level` renders with call-site detail.
    #[inline]
    pub fn wants_detail(&self, level: Level) -> bool {
        level >= self.detail_level
    }
}

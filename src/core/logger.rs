//! Logger front doors: asynchronous (queue-backed) and synchronous

use super::appender::{fan_out, flush_all, Appender};
use super::config::LoggerConfig;
use super::formatter::{render_or_fallback, CallSite, Formatter};
use super::level::Level;
use super::log_core::LogCore;
use super::metrics::CoreMetrics;
use super::record::{sanitize_message, LogRecord};
use crate::formatters::DefaultFormatter;
use parking_lot::Mutex;
use std::sync::Arc;

/// The object application code calls to emit records.
///
/// A `Logger` is a thin, cheaply-constructed handle over a shared
/// [`LogCore`]: it applies the minimum-level filter, sanitizes and renders
/// the message, and pushes the finished record onto the core's queue. All
/// sink I/O happens on the worker thread; `log()` never blocks on it.
///
/// Multiple loggers (with different formatters or thresholds) may attach to
/// one core; they share its queue and appender set but keep independent
/// config and formatter state. Reconfiguration takes `&mut self`, so a
/// logger shared between threads cannot be reconfigured without external
/// synchronization.
///
/// # Example
///
/// ```no_run
/// use logpipe::{Level, LogCore, Logger};
///
/// let core = LogCore::builder().console().start();
/// let mut logger = Logger::new(core.clone());
/// logger.set_min_level(Level::Info);
/// logger.info("ready");
/// logger.debug("filtered out, never allocated");
/// core.stop();
/// ```
pub struct Logger {
    core: Arc<LogCore>,
    config: LoggerConfig,
    formatter: Box<dyn Formatter>,
}

impl Logger {
    pub fn new(core: Arc<LogCore>) -> Self {
        Self::with_formatter(core, DefaultFormatter::new())
    }

    pub fn with_formatter(core: Arc<LogCore>, formatter: impl Formatter + 'static) -> Self {
        Self {
            core,
            config: LoggerConfig::default(),
            formatter: Box::new(formatter),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LoggerConfig) {
        self.config = config;
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.config.set_min_level(level);
    }

    pub fn set_detail_level(&mut self, level: Level) {
        self.config.set_detail_level(level);
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// The core this logger pushes to.
    pub fn core(&self) -> &Arc<LogCore> {
        &self.core
    }

    /// Whether a record at `level` would pass this logger's filter.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.config.enabled(level)
    }

    /// Filter, render, and enqueue one record, capturing the caller's
    /// source location.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.log_at(level, message.as_ref(), CallSite::here());
    }

    /// Like [`log`](Self::log) with an explicit call site; used by the
    /// logging macros, which also capture the module path.
    pub fn log_at(&self, level: Level, message: &str, call_site: CallSite) {
        if !self.config.enabled(level) {
            return;
        }
        let message = sanitize_message(message);
        let text =
            render_or_fallback(self.formatter.as_ref(), &self.config, level, &message, call_site);
        self.core.push(LogRecord::new(level, text));
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(Level::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message);
    }
}

/// Synchronous logger: performs appender I/O on the calling thread.
///
/// For use cases that need in-order, immediately-visible output at the cost
/// of caller-thread blocking. All sibling loggers over one sink set
/// serialize on a single blocking mutex, so at most one caller-thread write
/// is in flight at a time. No ordering is guaranteed between this path and
/// the asynchronous queue path.
///
/// # Example
///
/// ```
/// use logpipe::{ConsoleAppender, SyncLogger};
///
/// let logger = SyncLogger::new();
/// logger.add_appender(Box::new(ConsoleAppender::new()));
/// logger.info("written before this call returns");
/// ```
pub struct SyncLogger {
    config: LoggerConfig,
    formatter: Box<dyn Formatter>,
    sinks: Arc<Mutex<Vec<Box<dyn Appender>>>>,
    metrics: Arc<CoreMetrics>,
}

impl SyncLogger {
    pub fn new() -> Self {
        Self::with_formatter(DefaultFormatter::new())
    }

    pub fn with_formatter(formatter: impl Formatter + 'static) -> Self {
        Self {
            config: LoggerConfig::default(),
            formatter: Box::new(formatter),
            sinks: Arc::new(Mutex::new(Vec::new())),
            metrics: Arc::new(CoreMetrics::new()),
        }
    }

    /// Derive another logger sharing this one's sink set and metrics, with
    /// fresh config and formatter state.
    pub fn sibling(&self) -> Self {
        Self {
            config: LoggerConfig::default(),
            formatter: Box::new(DefaultFormatter::new()),
            sinks: Arc::clone(&self.sinks),
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.sinks.lock().push(appender);
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.config.set_min_level(level);
    }

    pub fn set_detail_level(&mut self, level: Level) {
        self.config.set_detail_level(level);
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    pub fn metrics(&self) -> &CoreMetrics {
        &self.metrics
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.config.enabled(level)
    }

    /// Filter, render, and write to every sink on the calling thread.
    ///
    /// Blocks for the duration of one fan-out cycle; per-appender failures
    /// are isolated exactly as on the worker path.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.log_at(level, message.as_ref(), CallSite::here());
    }

    /// Like [`log`](Self::log) with an explicit call site; used by the
    /// logging macros.
    pub fn log_at(&self, level: Level, message: &str, call_site: CallSite) {
        if !self.config.enabled(level) {
            return;
        }
        let message = sanitize_message(message);
        let text =
            render_or_fallback(self.formatter.as_ref(), &self.config, level, &message, call_site);
        let record = LogRecord::new(level, text);

        let mut sinks = self.sinks.lock();
        fan_out(&mut sinks, &record, &self.metrics);
        self.metrics.record_delivered();
    }

    /// Flush every sink under the shared lock.
    pub fn flush(&self) {
        let mut sinks = self.sinks.lock();
        flush_all(&mut sinks, &self.metrics);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(Level::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message);
    }
}

impl Default for SyncLogger {
    fn default() -> Self {
        Self::new()
    }
}

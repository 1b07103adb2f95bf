//! Logging macros for ergonomic message formatting.
//!
//! The macros check the level filter before formatting, so a filtered-out
//! call costs no allocation, and they capture the full call site including
//! the module path (the method API captures file/line/column only).
//!
//! They work with both [`Logger`](crate::Logger) and
//! [`SyncLogger`](crate::SyncLogger).
//!
//! # Examples
//!
//! ```no_run
//! use logpipe::prelude::*;
//! use logpipe::info;
//!
//! let core = LogCore::builder().console().start();
//! let logger = Logger::new(core);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use logpipe::prelude::*;
/// # let core = LogCore::builder().start();
/// # let logger = Logger::new(core);
/// use logpipe::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_at(
                level,
                &format!($($arg)+),
                $crate::CallSite::new(file!(), line!(), column!())
                    .with_module(module_path!()),
            );
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```no_run
/// # use logpipe::prelude::*;
/// # let core = LogCore::builder().start();
/// # let logger = Logger::new(core);
/// use logpipe::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::log_core::LogCore;
    use crate::core::{Level, Logger, SyncLogger};
    use std::sync::Arc;

    #[test]
    fn test_log_macro_renders_module_path() {
        let core = Arc::new(LogCore::builder().build());
        let logger = Logger::new(Arc::clone(&core));

        log!(logger, Level::Info, "plain message");
        log!(logger, Level::Error, "formatted: {}", 42);
        assert_eq!(core.queue_len(), 2);
        core.stop();
    }

    #[test]
    fn test_macro_skips_formatting_below_min_level() {
        let core = Arc::new(LogCore::builder().build());
        let mut logger = Logger::new(Arc::clone(&core));
        logger.set_min_level(Level::Warn);

        debug!(logger, "never formatted: {}", 1);
        trace!(logger, "never formatted: {}", 2);
        info!(logger, "never formatted: {}", 3);
        assert_eq!(core.queue_len(), 0);

        warn!(logger, "kept: {}", 4);
        error!(logger, "kept: {}", 5);
        fatal!(logger, "kept: {}", 6);
        assert_eq!(core.queue_len(), 3);
        core.stop();
    }

    #[test]
    fn test_macros_with_sync_logger() {
        let logger = SyncLogger::new();
        // No sinks configured; exercises the macro dispatch only
        info!(logger, "sync message {}", 1);
        error!(logger, "sync error");
        assert_eq!(logger.metrics().delivered(), 2);
    }
}

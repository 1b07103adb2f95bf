//! # logpipe
//!
//! An in-process asynchronous logging pipeline: callers emit leveled,
//! optionally-categorized messages; the pipeline renders them and delivers
//! them to one or more sinks (console, files) without blocking the caller
//! on slow I/O.
//!
//! - **Non-blocking producers**: `log()` filters, renders, and enqueues;
//!   all sink I/O happens on one dedicated worker thread
//! - **Drain-complete shutdown**: `stop()` delivers every buffered record
//!   before the worker terminates
//! - **Multi-appender fan-out**: console and file sinks with per-appender
//!   failure isolation and periodic flushing
//! - **Pluggable formatters**: compact or call-site-detailed rendering,
//!   keyed off a per-logger detail threshold

pub mod appenders;
pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, CallSite, CoreMetrics, CoreState, FlushPolicy, Formatter, Level, LevelTable,
        LogCore, LogCoreBuilder, LogRecord, Logger, LoggerConfig, MessageQueue, PipelineError,
        Result, SyncLogger, TimestampFormat, DEFAULT_FLUSH_INTERVAL,
    };
    pub use crate::formatters::{CategoryFormatter, DefaultFormatter};
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::global;
pub use core::{
    Appender, CallSite, CoreMetrics, CoreState, FlushPolicy, Formatter, Level, LevelTable, LogCore,
    LogCoreBuilder, LogRecord, Logger, LoggerConfig, MessageQueue, PipelineError, Result,
    SyncLogger, TimestampFormat, DEFAULT_FLUSH_INTERVAL,
};
pub use formatters::{CategoryFormatter, DefaultFormatter};

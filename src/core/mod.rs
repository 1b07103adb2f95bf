//! Core pipeline types: queue, worker, loggers, and their contracts

pub mod appender;
pub mod config;
pub mod error;
pub mod flush;
pub mod formatter;
pub mod global;
pub mod level;
pub mod log_core;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod record;
pub mod timestamp;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use error::{PipelineError, Result};
pub use flush::{FlushPolicy, DEFAULT_FLUSH_INTERVAL};
pub use formatter::{CallSite, Formatter};
pub use level::{Level, LevelTable};
pub use log_core::{CoreState, LogCore, LogCoreBuilder};
pub use logger::{Logger, SyncLogger};
pub use metrics::CoreMetrics;
pub use queue::MessageQueue;
pub use record::{sanitize_message, LogRecord};
pub use timestamp::TimestampFormat;

//! The record handed from producers to the worker

use super::level::Level;

/// A finished, formatted log line awaiting delivery.
///
/// Created by a `Logger` at call time, consumed exactly once by the worker
/// (or, in synchronous mode, by the calling thread), then discarded. The
/// text is fully rendered; appenders write it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub text: String,
}

impl LogRecord {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Sanitize a user-supplied message to prevent log injection.
///
/// Raw newlines, carriage returns, and tabs are escaped so one log call
/// always yields exactly one output line and attackers cannot forge
/// entries via embedded line breaks.
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

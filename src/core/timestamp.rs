//! Timestamp rendering for formatters
//!
//! Timestamping is opt-in: formatters render no timestamp unless one of
//! these formats is configured on them. All rendering is UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options.
///
/// # Examples
///
/// ```
/// use logpipe::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Simple;
/// let rendered = format.format(&Utc::now());
/// assert_eq!(rendered.len(), "2025-01-08 10:30:45".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Plain wall-clock format: `2025-01-08 10:30:45`
    #[default]
    Simple,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format string, e.g. `"%d/%b/%Y:%H:%M:%S"`.
    Custom(String),
}

impl TimestampFormat {
    /// Render a `DateTime<Utc>` according to this format.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Simple => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Render the current time according to this format.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}

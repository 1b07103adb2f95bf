//! Severity levels and the display lookup table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record severity, ordered ascending.
///
/// The total order drives both minimum-level filtering and the detail
/// threshold: `Debug < Trace < Info < Warn < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Debug = 0,
    Trace = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    /// Number of levels, used to size lookup tables.
    pub const COUNT: usize = 6;

    /// All levels in ascending severity order.
    pub const ALL: [Level; Level::COUNT] = [
        Level::Debug,
        Level::Trace,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Canonical uppercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Single-letter label for space-constrained output.
    pub fn compact_str(&self) -> &'static str {
        match self {
            Level::Debug => "D",
            Level::Trace => "T",
            Level::Info => "I",
            Level::Warn => "W",
            Level::Error => "E",
            Level::Fatal => "F",
        }
    }

    /// Canonical terminal color for this level.
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Cyan,
            Level::Trace => White,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal => Red,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(format!("Invalid level: '{}'", s)),
        }
    }
}

/// Immutable level-to-display lookup table.
///
/// Formatters and the console appender each own a table by value; there is
/// no process-wide mutable state. `Default` yields the canonical labels,
/// compact letters, and colors; the `with_*` builders produce customized
/// tables.
///
/// # Examples
///
/// ```
/// use logpipe::{Level, LevelTable};
///
/// let table = LevelTable::default().with_label(Level::Warn, "CAUTION");
/// assert_eq!(table.label(Level::Warn), "CAUTION");
/// assert_eq!(table.label(Level::Error), "ERROR");
/// ```
#[derive(Debug, Clone)]
pub struct LevelTable {
    labels: [&'static str; Level::COUNT],
    compact_labels: [&'static str; Level::COUNT],
    colors: [colored::Color; Level::COUNT],
}

impl Default for LevelTable {
    fn default() -> Self {
        let mut labels = [""; Level::COUNT];
        let mut compact_labels = [""; Level::COUNT];
        let mut colors = [colored::Color::White; Level::COUNT];
        for level in Level::ALL {
            labels[level.index()] = level.as_str();
            compact_labels[level.index()] = level.compact_str();
            colors[level.index()] = level.color();
        }
        Self {
            labels,
            compact_labels,
            colors,
        }
    }
}

impl LevelTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn label(&self, level: Level) -> &'static str {
        self.labels[level.index()]
    }

    #[inline]
    pub fn compact_label(&self, level: Level) -> &'static str {
        self.compact_labels[level.index()]
    }

    #[inline]
    pub fn color(&self, level: Level) -> colored::Color {
        self.colors[level.index()]
    }

    /// Replace the label for one level.
    #[must_use = "builder methods return a new value"]
    pub fn with_label(mut self, level: Level, label: &'static str) -> Self {
        self.labels[level.index()] = label;
        self
    }

    /// Replace the compact label for one level.
    #[must_use = "builder methods return a new value"]
    pub fn with_compact_label(mut self, level: Level, label: &'static str) -> Self {
        self.compact_labels[level.index()] = label;
        self
    }

    /// Replace the color for one level.
    #[must_use = "builder methods return a new value"]
    pub fn with_color(mut self, level: Level, color: colored::Color) -> Self {
        self.colors[level.index()] = color;
        self
    }
}

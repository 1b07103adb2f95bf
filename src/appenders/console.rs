//! Console appender

use crate::core::appender::Appender;
use crate::core::level::LevelTable;
use crate::core::record::LogRecord;
use crate::core::Result;
use colored::Colorize;
use std::io::Write;

/// Writes each rendered line to stdout, colored whole-line by level.
///
/// The stream is locked per write so lines from the synchronous path never
/// interleave mid-line. `flush()` is a no-op: stdout is line-buffered and
/// every record is newline-terminated, so there is nothing left to force.
pub struct ConsoleAppender {
    use_colors: bool,
    table: LevelTable,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            table: LevelTable::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Replace the level color table.
    #[must_use = "builder methods return a new value"]
    pub fn with_level_table(mut self, table: LevelTable) -> Self {
        self.table = table;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut out = std::io::stdout().lock();
        if self.use_colors {
            writeln!(
                out,
                "{}",
                record.text.as_str().color(self.table.color(record.level))
            )?;
        } else {
            writeln!(out, "{}", record.text)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

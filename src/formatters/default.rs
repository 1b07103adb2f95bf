//! The default rendering templates

use crate::core::formatter::{CallSite, Formatter};
use crate::core::level::LevelTable;
use crate::core::timestamp::TimestampFormat;
use crate::core::{Level, LoggerConfig};

/// Renders records in two modes keyed off the detail threshold.
///
/// Compact (below `detail_level`):
///
/// ```text
/// [INFO]  ready
/// ```
///
/// Detailed (at or above `detail_level`), with the module segment present
/// only when the call site carried one:
///
/// ```text
/// [ERROR] src/main.rs:42:9 [myapp::server]: bind failed
/// ```
///
/// An optional timestamp prefix is rendered when a [`TimestampFormat`] is
/// configured; it is off by default.
pub struct DefaultFormatter {
    table: LevelTable,
    timestamp: Option<TimestampFormat>,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self {
            table: LevelTable::default(),
            timestamp: None,
        }
    }

    /// Prefix every line with `[{timestamp}] `.
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    /// Replace the level display table.
    #[must_use = "builder methods return a new value"]
    pub fn with_level_table(mut self, table: LevelTable) -> Self {
        self.table = table;
        self
    }

    fn prefix(&self) -> String {
        match self.timestamp {
            Some(ref format) => format!("[{}] ", format.now()),
            None => String::new(),
        }
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for DefaultFormatter {
    fn format(
        &self,
        config: &LoggerConfig,
        level: Level,
        message: &str,
        call_site: CallSite,
    ) -> String {
        let label = self.table.label(level);
        if config.wants_detail(level) {
            match call_site.module {
                Some(module) => format!(
                    "{}[{}]\t{}:{}:{} [{}]: {}",
                    self.prefix(),
                    label,
                    call_site.file,
                    call_site.line,
                    call_site.column,
                    module,
                    message
                ),
                None => format!(
                    "{}[{}]\t{}:{}:{}: {}",
                    self.prefix(),
                    label,
                    call_site.file,
                    call_site.line,
                    call_site.column,
                    message
                ),
            }
        } else {
            format!("{}[{}]\t{}", self.prefix(), label, message)
        }
    }
}

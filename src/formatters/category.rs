//! Category-tagged rendering templates

use crate::core::formatter::{CallSite, Formatter};
use crate::core::level::LevelTable;
use crate::core::timestamp::TimestampFormat;
use crate::core::{Level, LoggerConfig};

/// Like [`DefaultFormatter`](crate::formatters::DefaultFormatter) but tags
/// every line with a fixed category, for loggers dedicated to a subsystem.
///
/// Compact: `[INFO] net: ready` — detailed:
/// `[ERROR]\tnet\tsrc/conn.rs:10:5 [myapp::net]: reset`.
pub struct CategoryFormatter {
    category: String,
    table: LevelTable,
    timestamp: Option<TimestampFormat>,
}

impl CategoryFormatter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            table: LevelTable::default(),
            timestamp: None,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
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

impl Formatter for CategoryFormatter {
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
                    "{}[{}]\t{}\t{}:{}:{} [{}]: {}",
                    self.prefix(),
                    label,
                    self.category,
                    call_site.file,
                    call_site.line,
                    call_site.column,
                    module,
                    message
                ),
                None => format!(
                    "{}[{}]\t{}\t{}:{}:{}: {}",
                    self.prefix(),
                    label,
                    self.category,
                    call_site.file,
                    call_site.line,
                    call_site.column,
                    message
                ),
            }
        } else {
            format!("{}[{}] {}: {}", self.prefix(), label, self.category, message)
        }
    }
}

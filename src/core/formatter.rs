//! The formatter contract between loggers and rendering

use super::config::LoggerConfig;
use super::level::Level;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Source location captured at the log call.
///
/// `Logger` methods capture file/line/column via `std::panic::Location`;
/// the logging macros additionally capture the module path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub module: Option<&'static str>,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            module: None,
        }
    }

    /// Capture the caller's location.
    #[track_caller]
    pub fn here() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_module(mut self, module: &'static str) -> Self {
        self.module = Some(module);
        self
    }
}

/// Renders one record into its final text line.
///
/// Implementations must be pure: no queue or appender interaction, and no
/// failure for any valid `Level`. A formatter with timestamping enabled
/// reads the clock; that is the only sanctioned impurity.
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        config: &LoggerConfig,
        level: Level,
        message: &str,
        call_site: CallSite,
    ) -> String;
}

/// Render through `formatter`, degrading to a plain fallback line if it
/// panics. A misbehaving formatter must never cost the caller the record.
pub(crate) fn render_or_fallback(
    formatter: &dyn Formatter,
    config: &LoggerConfig,
    level: Level,
    message: &str,
    call_site: CallSite,
) -> String {
    let rendered = catch_unwind(AssertUnwindSafe(|| {
        formatter.format(config, level, message, call_site)
    }));
    match rendered {
        Ok(text) => text,
        Err(panic) => {
            eprintln!(
                "[LOGPIPE ERROR] formatter panicked: {}; using fallback rendering",
                crate::core::error::panic_message(panic.as_ref())
            );
            format!("[{}]\t{}", level.as_str(), message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanickingFormatter;

    impl Formatter for PanickingFormatter {
        fn format(&self, _: &LoggerConfig, _: Level, _: &str, _: CallSite) -> String {
            panic!("formatter bug");
        }
    }

    #[test]
    fn test_call_site_capture() {
        let site = CallSite::here();
        assert!(site.file.ends_with("formatter.rs"));
        assert!(site.line > 0);
        assert!(site.module.is_none());

        let site = site.with_module(module_path!());
        assert_eq!(site.module, Some("logpipe::core::formatter::tests"));
    }

    #[test]
    fn test_fallback_on_formatter_panic() {
        let config = LoggerConfig::default();
        let text = render_or_fallback(
            &PanickingFormatter,
            &config,
            Level::Error,
            "still delivered",
            CallSite::here(),
        );
        assert_eq!(text, "[ERROR]\tstill delivered");
    }
}

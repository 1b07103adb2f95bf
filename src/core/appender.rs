//! The sink contract between the delivery core and its destinations

use super::error::{panic_message, Result};
use super::metrics::CoreMetrics;
use super::record::LogRecord;

/// A sink that durably or visibly records formatted log lines.
///
/// `append` and `flush` are best-effort: errors are reported to the
/// diagnostic channel and isolated per appender, never propagated into the
/// worker loop. `name()` identifies the appender in diagnostics.
pub trait Appender: Send + Sync {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Deliver one record to every appender in registry order.
///
/// A failing or panicking appender is reported and counted, and never
/// prevents delivery to the appenders after it.
pub(crate) fn fan_out(
    appenders: &mut [Box<dyn Appender>],
    record: &LogRecord,
    metrics: &CoreMetrics,
) {
    for appender in appenders.iter_mut() {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(record)
        }));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                metrics.record_append_error();
                eprintln!("[LOGPIPE ERROR] appender '{}' failed: {}", appender.name(), e);
            }
            Err(panic) => {
                metrics.record_append_error();
                eprintln!(
                    "[LOGPIPE ERROR] appender '{}' panicked: {}",
                    appender.name(),
                    panic_message(panic.as_ref())
                );
            }
        }
    }
}

/// Flush every appender with the same per-appender isolation as fan-out.
pub(crate) fn flush_all(appenders: &mut [Box<dyn Appender>], metrics: &CoreMetrics) {
    for appender in appenders.iter_mut() {
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| appender.flush()));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                metrics.record_append_error();
                eprintln!(
                    "[LOGPIPE ERROR] appender '{}' flush failed: {}",
                    appender.name(),
                    e
                );
            }
            Err(panic) => {
                metrics.record_append_error();
                eprintln!(
                    "[LOGPIPE ERROR] appender '{}' panicked during flush: {}",
                    appender.name(),
                    panic_message(panic.as_ref())
                );
            }
        }
    }
}

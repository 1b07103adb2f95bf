//! Process-wide convenience logger
//!
//! Sugar over the same core: the installed value is an ordinary [`Logger`]
//! and shares whatever [`LogCore`](super::log_core::LogCore) it was built
//! on. Nothing here is a separate implementation.

use super::error::{PipelineError, Result};
use super::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger. Fails if one is already installed.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| PipelineError::GlobalAlreadyInitialized)
}

/// The process-wide logger, if one has been installed.
pub fn get() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// The process-wide logger.
///
/// # Panics
///
/// Panics if [`init`] has not been called.
pub fn logger() -> &'static Logger {
    get().expect("global logger not initialized; call logpipe::global::init first")
}

//! File appender

use crate::core::appender::Appender;
use crate::core::error::PipelineError;
use crate::core::record::LogRecord;
use crate::core::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends each rendered line to a file, one line per record.
///
/// The file is opened for append at construction (created if absent) and
/// the open error, if any, is surfaced to the caller right there — a sink
/// that cannot exist is never handed to the worker. Writes are buffered;
/// `flush()` forces buffered bytes to the OS and `Drop` performs a final
/// best-effort flush.
#[derive(Debug)]
pub struct FileAppender {
    writer: BufWriter<File>,
    path: String,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| PipelineError::open_appender(path.display().to_string(), source))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.display().to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        // Rendered text is newline-free (sanitized at the front door)
        self.writer.write_all(record.text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

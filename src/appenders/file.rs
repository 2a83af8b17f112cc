//! File appender implementation

use crate::core::{Appender, Level, LogEntry, LoggerError, OutputFormat, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends plain-text lines to a file.
///
/// Every line is flushed before `append` returns, so the file always holds
/// complete lines in the order calls finished.
pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
    only: Option<Level>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_append(&path, e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            only: None,
        })
    }

    /// Restrict this appender to a single level
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tinted_logger::appenders::FileAppender;
    /// use tinted_logger::Level;
    ///
    /// let errors = FileAppender::new("logs/error.log")
    ///     .unwrap()
    ///     .only_level(Level::ERROR);
    /// ```
    #[must_use]
    pub fn only_level(mut self, level: Level) -> Self {
        self.only = Some(level);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = OutputFormat::File.format(entry);
        self.writer
            .write_all(output.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::file_append(&self.path, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::file_append(&self.path, e))
    }

    fn name(&self) -> &str {
        "file"
    }

    fn accepts(&self, level: Level) -> bool {
        self.only.map_or(true, |only| only == level)
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

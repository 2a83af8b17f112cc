//! Logger configuration
//!
//! [`LoggerConfig`] is the plain options structure handed to
//! [`Logger::new`](crate::Logger::new). It is resolved exactly once, when the
//! logger is built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_OUTPUT_FILE: &str = "output.log";
pub const DEFAULT_ERROR_FILE: &str = "error.log";

/// Options recognised when building a logger
///
/// # Examples
///
/// ```
/// use tinted_logger::LoggerConfig;
///
/// let config = LoggerConfig::new()
///     .with_log_dir("/tmp/my-app/logs")
///     .with_log_name("worker");
/// assert!(config.use_files);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Enables the output and error file sinks
    pub use_files: bool,
    /// Directory holding both log files
    pub log_dir: PathBuf,
    /// File name of the combined log
    pub output_file: String,
    /// File name of the error-only log
    pub error_file: String,
    /// Explicit tag printed before the level
    pub log_name: Option<String>,
    /// Print a tag even without an explicit name, using the caller's file
    pub use_log_name: bool,
    /// Emit ANSI colours on the console
    pub use_colours: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            use_files: true,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            error_file: DEFAULT_ERROR_FILE.to_string(),
            log_name: None,
            use_log_name: false,
            use_colours: true,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_use_files(mut self, use_files: bool) -> Self {
        self.use_files = use_files;
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    #[must_use]
    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    #[must_use]
    pub fn with_error_file(mut self, error_file: impl Into<String>) -> Self {
        self.error_file = error_file.into();
        self
    }

    #[must_use]
    pub fn with_log_name(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = Some(log_name.into());
        self
    }

    #[must_use]
    pub fn with_use_log_name(mut self, use_log_name: bool) -> Self {
        self.use_log_name = use_log_name;
        self
    }

    #[must_use]
    pub fn with_use_colours(mut self, use_colours: bool) -> Self {
        self.use_colours = use_colours;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.log_dir.join(&self.output_file)
    }

    pub fn error_path(&self) -> PathBuf {
        self.log_dir.join(&self.error_file)
    }

    /// Whether a tag is printed at all
    pub fn wants_log_name(&self) -> bool {
        self.explicit_log_name().is_some() || self.use_log_name
    }

    /// Tag to print, falling back to the basename of `caller_file`
    pub fn resolve_log_name(&self, caller_file: &str) -> Option<String> {
        if !self.wants_log_name() {
            return None;
        }
        Some(
            self.explicit_log_name()
                .map(String::from)
                .unwrap_or_else(|| file_basename(caller_file)),
        )
    }

    fn explicit_log_name(&self) -> Option<&str> {
        self.log_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Last path component of a source file, as reported by `Location::file`
pub(crate) fn file_basename(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

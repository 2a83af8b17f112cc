//! Main logger implementation

use super::{
    appender::Appender,
    colour::Colour,
    config::{file_basename, LoggerConfig},
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::{Level, LevelRegistry},
    message::Message,
    metrics::LoggerMetrics,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

/// Console and file logger with a per-instance level registry.
///
/// Every call prints to the console first. When files are enabled the same
/// line, without colours and with the full date, is appended to the output
/// file, and `ERROR` lines also go to the error file. All writes finish
/// before the call returns.
///
/// # Examples
///
/// ```
/// use tinted_logger::{Colour, Logger};
///
/// let logger = Logger::builder().use_files(false).log_name("docs").build()?;
/// logger.info("service ready");
///
/// let audit = logger.add_level("audit")?;
/// logger.log("user 42 signed in", audit, Colour::Magenta)?;
/// # Ok::<(), tinted_logger::LoggerError>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    registry: RwLock<LevelRegistry>,
    log_name: RwLock<Option<String>>,
    console: Mutex<ConsoleAppender>,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger from a plain options structure.
    ///
    /// When a log name is requested but not given, the basename of the
    /// calling source file is used.
    #[track_caller]
    pub fn new(config: LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn info(&self, message: impl Into<Message>) {
        self.log_builtin(message.into(), Level::INFO, Colour::Blue);
    }

    pub fn warning(&self, message: impl Into<Message>) {
        self.log_builtin(message.into(), Level::WARN, Colour::Yellow);
    }

    pub fn error(&self, message: impl Into<Message>) {
        self.log_builtin(message.into(), Level::ERROR, Colour::Red);
    }

    /// Log at any registered level with a caller-chosen colour.
    ///
    /// Fails with [`LoggerError::UnknownLevel`] before writing anything if
    /// `level` is not registered on this logger.
    pub fn log(&self, message: impl Into<Message>, level: Level, colour: Colour) -> Result<()> {
        self.emit(message.into(), level, colour)
    }

    /// Register a custom level, returning its index
    pub fn add_level(&self, name: &str) -> Result<Level> {
        self.registry.write().add(name)
    }

    /// Replace the log name tag.
    ///
    /// `None` (or an empty name) derives the tag from the calling source file.
    #[track_caller]
    pub fn set_log_name(&self, name: Option<&str>) {
        let name = match name.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => file_basename(Location::caller().file()),
        };
        *self.log_name.write() = Some(name);
    }

    pub fn log_name(&self) -> Option<String> {
        self.log_name.read().clone()
    }

    /// Case-insensitive level lookup
    pub fn level(&self, name: &str) -> Option<Level> {
        self.registry.read().get(name)
    }

    pub fn level_name(&self, level: Level) -> Result<String> {
        self.registry.read().name(level).map(String::from)
    }

    /// Snapshot of the level registry
    pub fn levels(&self) -> LevelRegistry {
        self.registry.read().clone()
    }

    pub fn uses_files(&self) -> bool {
        self.config.use_files
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.config.use_files.then(|| self.config.output_path())
    }

    pub fn error_path(&self) -> Option<PathBuf> {
        self.config.use_files.then(|| self.config.error_path())
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()?;
        for appender in self.appenders.lock().iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    fn log_builtin(&self, message: Message, level: Level, colour: Colour) {
        if let Err(e) = self.emit(message, level, colour) {
            self.report_failure(&e.to_string());
        }
    }

    fn emit(&self, message: Message, level: Level, colour: Colour) -> Result<()> {
        let level_name = self.registry.read().name(level)?.to_string();
        let entry = LogEntry::new(level, level_name, colour, message.render())
            .with_log_name(self.log_name());

        self.write_console(&entry);
        self.metrics.record_logged();

        // Collected first so reports are written after the appender lock is released
        let mut failures = Vec::new();
        {
            let mut appenders = self.appenders.lock();
            for appender in appenders.iter_mut().filter(|a| a.accepts(level)) {
                match appender.append(&entry) {
                    Ok(()) => self.metrics.record_file_write(),
                    Err(e) => {
                        self.metrics.record_failed_write();
                        failures.push(e);
                    }
                }
            }
        }

        for failure in failures {
            self.report_failure(&failure.to_string());
        }
        Ok(())
    }

    fn write_console(&self, entry: &LogEntry) {
        if let Err(e) = self.console.lock().append(entry) {
            eprintln!("[LOGGER ERROR] Console appender failed: {}", e);
        }
    }

    /// Console-only error line. Never touches the file sinks, so a failing
    /// sink cannot trigger another report.
    fn report_failure(&self, message: &str) {
        self.metrics.record_self_report();
        let entry = LogEntry::new(Level::ERROR, "ERROR", Colour::Red, message)
            .with_log_name(self.log_name());
        self.write_console(&entry);
    }

    fn reported(&self, err: LoggerError) -> LoggerError {
        self.report_failure(&err.to_string());
        err
    }

    fn open_file_sinks(&self) -> Result<()> {
        let dir = &self.config.log_dir;
        std::fs::create_dir_all(dir)
            .map_err(|e| self.reported(LoggerError::log_directory(dir, e)))?;

        let output =
            FileAppender::new(self.config.output_path()).map_err(|e| self.reported(e))?;
        let errors = FileAppender::new(self.config.error_path())
            .map_err(|e| self.reported(e))?
            .only_level(Level::ERROR);

        let mut appenders = self.appenders.lock();
        appenders.push(Box::new(output));
        appenders.push(Box::new(errors));
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```no_run
/// use tinted_logger::Logger;
///
/// let logger = Logger::builder()
///     .log_dir("/var/log/my-app")
///     .output_file("app.log")
///     .error_file("app-errors.log")
///     .use_log_name(true)
///     .build()?;
/// # Ok::<(), tinted_logger::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<ConsoleAppender>,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            console: None,
            appenders: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn use_files(mut self, use_files: bool) -> Self {
        self.config.use_files = use_files;
        self
    }

    #[must_use]
    pub fn log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = log_dir.into();
        self
    }

    #[must_use]
    pub fn output_file(mut self, output_file: impl Into<String>) -> Self {
        self.config.output_file = output_file.into();
        self
    }

    #[must_use]
    pub fn error_file(mut self, error_file: impl Into<String>) -> Self {
        self.config.error_file = error_file.into();
        self
    }

    #[must_use]
    pub fn log_name(mut self, log_name: impl Into<String>) -> Self {
        self.config.log_name = Some(log_name.into());
        self
    }

    #[must_use]
    pub fn use_log_name(mut self, use_log_name: bool) -> Self {
        self.config.use_log_name = use_log_name;
        self
    }

    #[must_use]
    pub fn use_colours(mut self, use_colours: bool) -> Self {
        self.config.use_colours = use_colours;
        self
    }

    /// Write console output to `writer` instead of stdout
    #[must_use]
    pub fn console_writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.console = Some(ConsoleAppender::new().with_writer(writer));
        self
    }

    /// Register an extra appender, fed after the built-in file sinks
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Resolve the configuration and open the sinks.
    ///
    /// Creates the log directory when files are enabled. A failure is printed
    /// to the console and returned; the process is never terminated.
    #[track_caller]
    pub fn build(self) -> Result<Logger> {
        let caller = Location::caller().file();
        let use_colours = self.config.use_colours;
        let console = self
            .console
            .unwrap_or_default()
            .use_colours(use_colours);

        let logger = Logger {
            log_name: RwLock::new(self.config.resolve_log_name(caller)),
            config: self.config,
            registry: RwLock::new(LevelRegistry::new()),
            console: Mutex::new(console),
            appenders: Mutex::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        };

        if logger.config.use_files {
            logger.open_file_sinks()?;
        }
        logger.appenders.lock().extend(self.appenders);

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::file_append(
                "broken.log",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn console_logger(buffer: &SharedBuffer) -> Logger {
        Logger::builder()
            .use_files(false)
            .use_colours(false)
            .console_writer(buffer.clone())
            .build()
            .expect("logger without files always builds")
    }

    #[test]
    fn test_builtin_levels_printed() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer);

        logger.info("info message");
        logger.warning("warning message");
        logger.error("error message");

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[INFO] info message"));
        assert!(lines[1].ends_with("[WARN] warning message"));
        assert!(lines[2].ends_with("[ERROR] error message"));
        assert_eq!(logger.metrics().total_logged(), 3);
    }

    #[test]
    fn test_custom_level() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer);

        let custom = logger.add_level("custom").unwrap();
        assert_eq!(custom.index(), 3);
        assert_eq!(logger.level("CUSTOM"), Some(custom));
        assert_eq!(logger.level("info"), Some(Level::INFO));

        logger.log("Custom message!", custom, Colour::Magenta).unwrap();
        assert!(buffer.contents().contains("[CUSTOM] Custom message!"));
    }

    #[test]
    fn test_unknown_level_writes_nothing() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer);

        let result = logger.log("ghost", Level::from_index(9), Colour::Cyan);
        assert!(matches!(result, Err(LoggerError::UnknownLevel(9))));
        assert!(buffer.contents().is_empty());
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_structured_message() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer);

        logger.info(json!({ "num": 100 }));
        assert!(buffer.contents().contains("[INFO] \n{\n    \"num\": 100\n}"));
    }

    #[test]
    fn test_log_name_derived_from_caller() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .use_files(false)
            .use_colours(false)
            .use_log_name(true)
            .console_writer(buffer.clone())
            .build()
            .unwrap();

        assert_eq!(logger.log_name().as_deref(), Some("logger.rs"));
        logger.info("x");
        assert!(buffer.contents().contains(" [logger.rs] [INFO] x"));
    }

    #[test]
    fn test_set_log_name() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer);
        assert_eq!(logger.log_name(), None);

        logger.set_log_name(Some("worker"));
        logger.info("first");
        logger.set_log_name(None);
        logger.info("second");

        let output = buffer.contents();
        assert!(output.contains(" [worker] [INFO] first"));
        assert!(output.contains(" [logger.rs] [INFO] second"));
    }

    #[test]
    fn test_failing_appender_reported_once() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .use_files(false)
            .use_colours(false)
            .console_writer(buffer.clone())
            .appender(FailingAppender)
            .build()
            .unwrap();

        logger.info("payload");

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] payload"));
        assert!(lines[1].contains("[ERROR] Failed to append to logfile 'broken.log'"));
        assert_eq!(logger.metrics().failed_writes(), 1);
        assert_eq!(logger.metrics().self_reports(), 1);
    }

    #[test]
    fn test_files_disabled_creates_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_dir = temp_dir.path().join("logs");

        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .use_files(false)
            .log_dir(&log_dir)
            .console_writer(buffer.clone())
            .build()
            .unwrap();

        logger.error("nothing on disk");
        assert!(!log_dir.exists());
        assert!(logger.output_path().is_none());
        assert!(logger.error_path().is_none());
        assert_eq!(logger.metrics().file_writes(), 0);
    }

    #[test]
    fn test_directory_failure_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let buffer = SharedBuffer::default();
        let result = Logger::builder()
            .log_dir(blocker.join("logs"))
            .use_colours(false)
            .console_writer(buffer.clone())
            .build();

        assert!(matches!(result, Err(LoggerError::LogDirectory { .. })));
        assert!(buffer.contents().contains("[ERROR] Failed to create log directory"));
    }

    #[test]
    fn test_builder_default() {
        let builder = LoggerBuilder::default();
        assert!(builder.config.use_files);
        assert!(builder.appenders.is_empty());
    }
}

//! Console appender implementation

use crate::core::{Appender, LogEntry, OutputFormat, Result};
use std::io::Write;

enum Target {
    Stdout,
    Writer(Box<dyn Write + Send + Sync>),
}

/// Writes every entry to stdout, or to an injected writer.
///
/// Each line is written and flushed before `append` returns.
pub struct ConsoleAppender {
    target: Target,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            target: Target::Stdout,
            output_format: OutputFormat::Console,
        }
    }

    pub fn with_colours(use_colours: bool) -> Self {
        Self {
            target: Target::Stdout,
            output_format: OutputFormat::console(use_colours),
        }
    }

    /// Send console output somewhere other than stdout
    ///
    /// # Example
    ///
    /// ```
    /// use tinted_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_writer(std::io::sink());
    /// ```
    #[must_use]
    pub fn with_writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.target = Target::Writer(Box::new(writer));
        self
    }

    #[must_use]
    pub fn use_colours(mut self, use_colours: bool) -> Self {
        self.output_format = OutputFormat::console(use_colours);
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        match &mut self.target {
            Target::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", line)?;
                handle.flush()
            }
            Target::Writer(writer) => {
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.output_format.format(entry);
        self.write_line(&output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            Target::Stdout => std::io::stdout().flush()?,
            Target::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colour, Level};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_output_to_writer() {
        let buffer = SharedBuffer::default();
        let mut appender = ConsoleAppender::with_colours(false).with_writer(buffer.clone());

        let entry = LogEntry::new(Level::INFO, "INFO", Colour::Blue, "ready")
            .with_log_name(Some("server".to_string()));
        appender.append(&entry).unwrap();

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert!(output.ends_with(" [server] [INFO] ready\n"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_coloured_by_default() {
        let buffer = SharedBuffer::default();
        let mut appender = ConsoleAppender::new().with_writer(buffer.clone());
        assert_eq!(appender.output_format(), OutputFormat::Console);

        let entry = LogEntry::new(Level::ERROR, "ERROR", Colour::Red, "boom");
        appender.append(&entry).unwrap();

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert!(output.contains("\x1b[31mERROR"));
    }

    #[test]
    fn test_accepts_every_level() {
        let appender = ConsoleAppender::new();
        assert!(appender.accepts(Level::INFO));
        assert!(appender.accepts(Level::from_index(42)));
        assert_eq!(appender.name(), "console");
    }
}

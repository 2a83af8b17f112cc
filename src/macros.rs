//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use tinted_logger::prelude::*;
//! use tinted_logger::info;
//!
//! let logger = Logger::builder().use_files(false).build()?;
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log at any registered level with a colour. Evaluates to a `Result`.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder().use_files(false).build()?;
/// use tinted_logger::log;
/// let notice = logger.add_level("notice")?;
/// log!(logger, notice, Colour::Cyan, "Cache warmed in {}ms", 12)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $colour:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+), $level, $colour)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder().use_files(false).build()?;
/// use tinted_logger::info;
/// info!(logger, "Loaded {} plugins", 3);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder().use_files(false).build()?;
/// use tinted_logger::warning;
/// warning!(logger, "Retrying in {}s", 5);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder().use_files(false).build()?;
/// use tinted_logger::error;
/// error!(logger, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use parking_lot::Mutex;
    use std::io::Write;
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
    fn test_macros_format_arguments() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .use_files(false)
            .use_colours(false)
            .console_writer(buffer.clone())
            .build()
            .unwrap();

        crate::info!(logger, "port {}", 8080);
        crate::warning!(logger, "{} retries left", 2);
        crate::error!(logger, "code {code}", code = 500);
        let custom = logger.add_level("trace").unwrap();
        crate::log!(logger, custom, Colour::Grey, "step {}", 1).unwrap();

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert!(output.contains("[INFO] port 8080"));
        assert!(output.contains("[WARN] 2 retries left"));
        assert!(output.contains("[ERROR] code 500"));
        assert!(output.contains("[TRACE] step 1"));
    }
}

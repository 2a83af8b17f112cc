//! # Tinted Logger
//!
//! A small console and file logger. Messages are printed with a coloured
//! timestamp, an optional log name and a level tag. Plain-text copies go to an
//! output log, and `ERROR` messages also go to a separate error log.
//!
//! ## Features
//!
//! - **Custom levels**: register levels beyond `INFO`/`WARN`/`ERROR` at runtime
//! - **Log names**: tag every line with a component name, or the caller's file
//! - **Structured messages**: JSON values are pretty-printed under the header
//! - **Synchronous sinks**: every write completes before the call returns
//!
//! ```
//! use tinted_logger::prelude::*;
//!
//! let logger = Logger::builder().use_files(false).log_name("Tests").build()?;
//! logger.info("Information message");
//! logger.warning("Warning message");
//! logger.error("Error message");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, Colour, DateType, Level, LevelRegistry, LogEntry, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Message, OutputFormat, Result,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, Colour, DateType, Level, LevelRegistry, LogEntry, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Message, OutputFormat, Result,
};

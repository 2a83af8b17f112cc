//! Core logger types and traits

pub mod appender;
pub mod colour;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use colour::Colour;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::{Level, LevelRegistry};
pub use logger::{Logger, LoggerBuilder};
pub use message::Message;
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use timestamp::DateType;

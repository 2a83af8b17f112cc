//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry, log_level::Level};

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether entries at `level` should be handed to this appender
    fn accepts(&self, _level: Level) -> bool {
        true
    }
}

//! Log entry structure

use super::colour::Colour;
use super::log_level::Level;
use chrono::{DateTime, Local};

/// A fully resolved message, ready to be handed to appenders.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    /// Registry name of `level` at the time of logging
    pub level_name: String,
    pub colour: Colour,
    /// Rendered message body
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub log_name: Option<String>,
}

impl LogEntry {
    pub fn new(
        level: Level,
        level_name: impl Into<String>,
        colour: Colour,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            level_name: level_name.into(),
            colour,
            message: message.into(),
            timestamp: Local::now(),
            log_name: None,
        }
    }

    pub fn with_log_name(mut self, log_name: Option<String>) -> Self {
        self.log_name = log_name;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

//! Timestamp formatting
//!
//! Two layouts are supported: the short `HH:MM:SS` used on the console and
//! the full `[DD/MM/YY] HH:MM:SS` written to log files.

use super::colour::Colour;
use super::error::LoggerError;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%d/%m/%y";

/// Which parts of the timestamp to render
///
/// # Examples
///
/// ```
/// use tinted_logger::DateType;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2025, 1, 8, 9, 5, 3).unwrap();
/// assert_eq!(DateType::Time.format(&instant), "09:05:03");
/// assert_eq!(DateType::Full.format(&instant), "[08/01/25] 09:05:03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateType {
    /// `HH:MM:SS`
    Time = 0,
    /// `[DD/MM/YY] HH:MM:SS`
    Full = 1,
}

impl DateType {
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(DateType::Time),
            1 => Some(DateType::Full),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            DateType::Time => "TIME",
            DateType::Full => "FULL",
        }
    }

    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let time = datetime.format(TIME_FORMAT);
        match self {
            DateType::Time => time.to_string(),
            DateType::Full => format!("[{}] {}", datetime.format(DATE_FORMAT), time),
        }
    }

    /// Same layout as [`format`](Self::format) with the digits wrapped in grey
    #[must_use]
    pub fn format_coloured<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let (grey, reset) = (Colour::Grey, Colour::Reset);
        let time = format!("{grey}{}{reset}", datetime.format(TIME_FORMAT));
        match self {
            DateType::Time => time,
            DateType::Full => {
                format!("[{grey}{}{reset}] {time}", datetime.format(DATE_FORMAT))
            }
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for DateType {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TIME" => Ok(DateType::Time),
            "FULL" => Ok(DateType::Full),
            _ => Err(LoggerError::UnknownDateType(s.to_string())),
        }
    }
}

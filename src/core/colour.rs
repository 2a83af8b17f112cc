//! Terminal colour table

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of ANSI foreground colours used when printing to the console.
///
/// Callers pass one of these to [`Logger::log`](crate::Logger::log) to pick
/// the colour of a custom level's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Colour {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl Colour {
    /// The eight named colours, excluding `Reset`
    pub const NAMED: [Colour; 8] = [
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::Cyan,
        Colour::White,
        Colour::Grey,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Colour::Reset => "RESET",
            Colour::Red => "RED",
            Colour::Green => "GREEN",
            Colour::Yellow => "YELLOW",
            Colour::Blue => "BLUE",
            Colour::Magenta => "MAGENTA",
            Colour::Cyan => "CYAN",
            Colour::White => "WHITE",
            Colour::Grey => "GREY",
        }
    }

    /// Matching `colored` colour, `None` for `Reset`
    pub fn as_colored(&self) -> Option<colored::Color> {
        use colored::Color;
        match self {
            Colour::Reset => None,
            Colour::Red => Some(Color::Red),
            Colour::Green => Some(Color::Green),
            Colour::Yellow => Some(Color::Yellow),
            Colour::Blue => Some(Color::Blue),
            Colour::Magenta => Some(Color::Magenta),
            Colour::Cyan => Some(Color::Cyan),
            Colour::White => Some(Color::White),
            Colour::Grey => Some(Color::BrightBlack),
        }
    }

    /// ANSI escape sequence for this colour
    pub fn code(&self) -> &'static str {
        match self {
            Colour::Reset => "\x1b[0m",
            Colour::Red => "\x1b[31m",
            Colour::Green => "\x1b[32m",
            Colour::Yellow => "\x1b[33m",
            Colour::Blue => "\x1b[34m",
            Colour::Magenta => "\x1b[35m",
            Colour::Cyan => "\x1b[36m",
            Colour::White => "\x1b[37m",
            Colour::Grey => "\x1b[90m",
        }
    }
}

impl fmt::Display for Colour {
    /// Writes the escape sequence, so colours can be dropped straight into `format!`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Colour {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESET" => Ok(Colour::Reset),
            "RED" => Ok(Colour::Red),
            "GREEN" => Ok(Colour::Green),
            "YELLOW" => Ok(Colour::Yellow),
            "BLUE" => Ok(Colour::Blue),
            "MAGENTA" => Ok(Colour::Magenta),
            "CYAN" => Ok(Colour::Cyan),
            "WHITE" => Ok(Colour::White),
            "GREY" | "GRAY" => Ok(Colour::Grey),
            _ => Err(LoggerError::UnknownColour(s.to_string())),
        }
    }
}

//! Line layouts for console and file output
//!
//! Console (coloured):
//! `GREY HH:MM:SS RESET [ GREY[ GREEN name GREY] RESET] GREY[ colour LEVEL GREY] WHITE message RESET`
//!
//! File: `[DD/MM/YY] HH:MM:SS [name] [LEVEL] message\n`

use super::colour::Colour;
use super::log_entry::LogEntry;
use super::timestamp::DateType;

/// Output layout for a log entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Short time, ANSI colours
    #[default]
    Console,

    /// Short time, no escape codes
    PlainConsole,

    /// Full date, no escape codes, newline terminated
    File,
}

impl OutputFormat {
    /// Console layout with or without colour
    pub fn console(use_colours: bool) -> Self {
        if use_colours {
            OutputFormat::Console
        } else {
            OutputFormat::PlainConsole
        }
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        match self {
            OutputFormat::Console => self.format_coloured(entry),
            OutputFormat::PlainConsole => format_plain(entry, DateType::Time),
            OutputFormat::File => {
                let mut line = format_plain(entry, DateType::Full);
                line.push('\n');
                line
            }
        }
    }

    fn format_coloured(&self, entry: &LogEntry) -> String {
        let (grey, reset) = (Colour::Grey, Colour::Reset);
        let name = entry
            .log_name
            .as_ref()
            .map(|name| format!(" {grey}[{}{name}{grey}]{reset}", Colour::Green))
            .unwrap_or_default();

        format!(
            "{}{} {grey}[{}{}{grey}] {}{}{reset}",
            DateType::Time.format_coloured(&entry.timestamp),
            name,
            entry.colour,
            entry.level_name,
            Colour::White,
            entry.message,
        )
    }
}

fn format_plain(entry: &LogEntry, date_type: DateType) -> String {
    let name = entry
        .log_name
        .as_ref()
        .map(|name| format!(" [{name}]"))
        .unwrap_or_default();

    format!(
        "{}{} [{}] {}",
        date_type.format(&entry.timestamp),
        name,
        entry.level_name,
        entry.message
    )
}

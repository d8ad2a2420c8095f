use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

lazy_static! {
    // date, time, level, then everything else verbatim
    static ref LINE_REGEX: Regex = Regex::new(r"(?s)^(\S+)\s+(\S+)\s+(\S+)\s+(.+)$")
        .expect("Failed to create line regex");
}

/// One structured record parsed from a single log line.
///
/// Only [`parse_line`] builds these, so every field is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    date: String,
    time: String,
    level: String,
    message: String,
}

impl LogEntry {
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Severity label exactly as written in the source line.
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Parse `<date> <time> <level> <message...>` into a [`LogEntry`].
///
/// Leading and trailing whitespace is trimmed first. Tokens are separated by
/// one or more whitespace characters and the message keeps its inner
/// whitespace untouched. Fewer than four tokens is a [`ParseError`] carrying
/// the raw line.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let caps = LINE_REGEX
        .captures(line.trim())
        .ok_or_else(|| ParseError::MalformedLine {
            line: line.to_string(),
        })?;

    Ok(LogEntry {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        level: caps[3].to_string(),
        message: caps[4].to_string(),
    })
}

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::models::VisitorRecord;

pub const SEPARATOR: &str = " | ";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static RECORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+?) \| (?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})$")
        .expect("record regex is valid")
});

/// Parses one stored line (without its line terminator) into a record.
pub fn parse_record_line(line: &str) -> Result<VisitorRecord> {
    let malformed = |reason: &str| Error::MalformedRecord {
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let tokens = RECORD_REGEX
        .captures(line)
        .ok_or_else(|| malformed("expected `name | YYYY-MM-DD HH:MM:SS`"))?;

    let timestamp = NaiveDateTime::parse_from_str(&tokens["timestamp"], TIMESTAMP_FORMAT)
        .map_err(|e| malformed(&e.to_string()))?;

    Ok(VisitorRecord {
        name: tokens["name"].to_string(),
        timestamp,
    })
}

/// Renders a record as a log line, terminator included.
pub fn format_record(record: &VisitorRecord) -> String {
    format!(
        "{}{}{}\n",
        record.name,
        SEPARATOR,
        record.timestamp.format(TIMESTAMP_FORMAT)
    )
}

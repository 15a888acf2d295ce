use chrono::{NaiveDateTime, Timelike};

/// One line of the visitor log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorRecord {
    pub name: String,
    pub timestamp: NaiveDateTime,
}

impl VisitorRecord {
    /// Builds a record, dropping sub-second precision the log cannot store.
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);
        VisitorRecord {
            name: name.into(),
            timestamp,
        }
    }
}

use chrono::{Duration, Local, NaiveDateTime};
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::VisitorRecord;
use crate::parser::SEPARATOR;
use crate::store::LogStore;

/// Validates and records check-ins against a [`LogStore`].
pub struct CheckIn {
    store: LogStore,
    early_entry_minutes: Option<u32>,
}

impl CheckIn {
    pub fn new(store: LogStore) -> Self {
        CheckIn {
            store,
            early_entry_minutes: None,
        }
    }

    /// Check-in over the configured log path, with the early-entry rule
    /// active when the config sets a window.
    pub fn from_config(config: &Config) -> Self {
        let checkin = CheckIn::new(LogStore::new(&config.log_path));
        match config.early_entry_minutes {
            Some(minutes) => checkin.with_early_entry_minutes(minutes),
            None => checkin,
        }
    }

    /// Requires `minutes` between two different visitors.
    pub fn with_early_entry_minutes(mut self, minutes: u32) -> Self {
        self.early_entry_minutes = Some(minutes);
        self
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn add_visitor(&self, name: &str) -> Result<VisitorRecord> {
        self.add_visitor_at(name, Local::now().naive_local())
    }

    pub fn add_visitor_at(&self, name: &str, now: NaiveDateTime) -> Result<VisitorRecord> {
        validate_name(name)?;

        let record = VisitorRecord::new(name, now);

        if let Some(last) = self.store.last_record()? {
            if last.name == name {
                info!("rejected consecutive check-in for {:?}", name);
                return Err(Error::DuplicateVisitor(name.to_string()));
            }

            if let Some(minutes) = self.early_entry_minutes {
                if record.timestamp - last.timestamp < Duration::minutes(i64::from(minutes)) {
                    info!(
                        "rejected {:?}, {:?} checked in at {}",
                        name, last.name, last.timestamp
                    );
                    return Err(Error::EarlyEntry {
                        wait_minutes: minutes,
                    });
                }
            }
        }

        self.store.append(&record)?;
        Ok(record)
    }
}

/// Rejects names the line format cannot store unambiguously.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty()
        || name.trim() != name
        || name.contains(SEPARATOR)
        || name.contains(['\n', '\r'])
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("Jean-Luc O'Neil").is_ok());
        assert!(validate_name("a|b").is_ok());
    }

    #[test]
    fn rejects_unstorable_names() {
        for name in ["", "   ", " Alice", "Alice\t", "Tom | Jerry", "line\nbreak", "cr\r"] {
            let err = validate_name(name).unwrap_err();
            assert!(matches!(err, Error::InvalidName(ref n) if n == name));
        }
    }
}

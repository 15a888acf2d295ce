use std::io;

use thiserror::Error;

/// Everything a check-in can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// The same visitor is already the last record in the log.
    #[error("Visitor '{0}' has already visited.")]
    DuplicateVisitor(String),

    /// A different visitor checked in before the configured window elapsed.
    /// Only raised when `early_entry_minutes` is configured.
    #[error("A {wait_minutes}-minute wait is required between different visitors.")]
    EarlyEntry { wait_minutes: u32 },

    #[error("invalid visitor name {0:?}")]
    InvalidName(String),

    #[error("malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateVisitor(_))
    }

    /// Check-in was refused by a rule, as opposed to failing on I/O or a
    /// corrupt log.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::DuplicateVisitor(_) | Error::EarlyEntry { .. } | Error::InvalidName(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_the_visitor() {
        let err = Error::DuplicateVisitor("Alice".to_string());
        assert_eq!(err.to_string(), "Visitor 'Alice' has already visited.");
        assert!(err.is_duplicate());
        assert!(err.is_rejection());
    }

    #[test]
    fn early_entry_message_uses_window() {
        let err = Error::EarlyEntry { wait_minutes: 5 };
        assert_eq!(
            err.to_string(),
            "A 5-minute wait is required between different visitors."
        );
        assert!(!err.is_duplicate());
    }

    #[test]
    fn io_errors_are_not_rejections() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_rejection());
    }
}

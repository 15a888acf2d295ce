use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::VisitorRecord;
use crate::parser::{format_record, parse_record_line};

/// Append-only visitor log backed by a single text file.
///
/// Every operation opens the file, does its work and drops the handle
/// before returning.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        LogStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty log if there is none yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        debug!("created visitor log at {}", self.path.display());
        Ok(())
    }

    /// The most recent record, or `None` for a missing or blank log.
    /// Surrounding whitespace on a stored line is ignored.
    pub fn last_record(&self) -> Result<Option<VisitorRecord>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(None);
        };

        let mut last_line: Option<String> = None;
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                last_line = Some(line);
            }
        }

        last_line
            .map(|line| parse_record_line(line.trim()))
            .transpose()
    }

    /// Every record in insertion order. Blank lines are skipped.
    pub fn records(&self) -> Result<Vec<VisitorRecord>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_record_line(line.trim())?);
        }
        Ok(records)
    }

    pub fn append(&self, record: &VisitorRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_record(record).as_bytes())?;
        debug!("appended {:?} to {}", record.name, self.path.display());
        Ok(())
    }

    fn open_reader(&self) -> Result<Option<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

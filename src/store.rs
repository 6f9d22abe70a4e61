// src/store.rs
// Session file store: one append-only markdown file per local calendar date

use crate::config::{SESSION_NOTE, SESSION_TITLE_PREFIX};
use crate::error::{MemError, Result};
use crate::observation::{ParsedLine, end_marker, is_end_marker};
use chrono::{NaiveDate, NaiveTime};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Owns the on-disk daily session files under one directory
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the session file for `date`
    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format(DATE_FORMAT)))
    }

    /// Header block written when a day's file is created
    pub fn header(date: NaiveDate) -> String {
        format!(
            "{}{}\n\n{}\n\n---\n\n",
            SESSION_TITLE_PREFIX,
            date.format(DATE_FORMAT),
            SESSION_NOTE
        )
    }

    /// Append one line to the file for `date`, creating it with a header first.
    ///
    /// Every write is a single O_APPEND write; nothing is read back.
    pub fn record_line(&self, date: NaiveDate, line: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_path(date);

        match OpenOptions::new().append(true).create_new(true).open(&path) {
            Ok(mut file) => {
                debug!(path = %path.display(), "Creating session file");
                let content = format!("{}{}\n", Self::header(date), line);
                file.write_all(content.as_bytes())?;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let mut file = OpenOptions::new().append(true).open(&path)?;
                file.write_all(format!("{}\n", line).as_bytes())?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Full text of the file for `date`, `None` when it does not exist
    pub fn read_file(&self, date: NaiveDate) -> Result<Option<String>> {
        match fs::read_to_string(self.file_path(date)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the file for `date` in one step (temp file + rename)
    pub fn write_file(&self, date: NaiveDate, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_path(date);
        let temp_path = path.with_extension("md.tmp");
        fs::write(&temp_path, text)?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// Dates that have a session file, newest first
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut dates: Vec<NaiveDate> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("md") {
                    return None;
                }
                let stem = path.file_stem()?.to_str()?;
                parse_date(stem).ok()
            })
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        Ok(dates)
    }

    /// Close the day's file with a session-end marker.
    ///
    /// A marker with no observations after it is replaced rather than stacked.
    /// Returns the marker written, or `None` when there is nothing to close.
    pub fn append_end_marker(&self, date: NaiveDate, time: NaiveTime) -> Result<Option<String>> {
        let Some(text) = self.read_file(date)? else {
            return Ok(None);
        };
        let observations: usize = text
            .lines()
            .filter_map(ParsedLine::parse)
            .map(|p| p.touches.map(|(n, _)| n).unwrap_or(1))
            .sum();
        if observations == 0 {
            return Ok(None);
        }

        let marker = end_marker(time, observations);
        if let Some((before, last)) = text.trim_end().rsplit_once('\n')
            && is_end_marker(last)
        {
            self.write_file(date, &format!("{}\n\n{}\n", before.trim_end(), marker))?;
            return Ok(Some(marker));
        }

        let mut file = OpenOptions::new().append(true).open(self.file_path(date))?;
        file.write_all(format!("\n{}\n", marker).as_bytes())?;
        Ok(Some(marker))
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| MemError::InvalidDate(s.to_string()))
}

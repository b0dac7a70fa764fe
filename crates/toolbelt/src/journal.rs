//! Audit journal passed explicitly to the utilities that log their operations.
//!
//! Line format: `[YYYY-MM-DD HH:MM:SS] LEVEL: message`, local time.
//!
//! Write failures never abort the operation being journaled; they surface as
//! `tracing::warn!` events instead.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        })
    }
}

/// Sink for journal records.
pub trait Journal {
    fn record(&mut self, level: Level, message: &str);

    #[inline]
    fn info(&mut self, message: &str) {
        self.record(Level::Info, message);
    }

    #[inline]
    fn error(&mut self, message: &str) {
        self.record(Level::Error, message);
    }
}

impl<J: Journal + ?Sized> Journal for &mut J {
    #[inline]
    fn record(&mut self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

/// Render one journal line (without trailing newline).
pub fn format_line(at: NaiveDateTime, level: Level, message: &str) -> String {
    format!("[{}] {}: {}", at.format(TIME_FORMAT), level, message)
}

/// Appends records to a file, one flushed line each.
#[derive(Debug)]
pub struct FileJournal {
    path: PathBuf,
    file: File,
}

impl FileJournal {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    /// Where the lines go.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Journal for FileJournal {
    fn record(&mut self, level: Level, message: &str) {
        let line = format_line(Local::now().naive_local(), level, message);
        if let Err(err) = writeln!(self.file, "{line}").and_then(|()| self.file.flush()) {
            tracing::warn!(path = %self.path.display(), %err, "journal write failed");
        }
    }
}

/// Keeps records in memory; handy for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryJournal {
    pub entries: Vec<(Level, String)>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, m)| m.as_str()).collect()
    }
}

impl Journal for MemoryJournal {
    fn record(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullJournal;

impl Journal for NullJournal {
    #[inline]
    fn record(&mut self, _level: Level, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn line_format_matches_script_log() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(
            format_line(at, Level::Info, "DataStorage initialized"),
            "[2024-03-09 07:05:00] INFO: DataStorage initialized"
        );
        assert_eq!(
            format_line(at, Level::Error, "boom"),
            "[2024-03-09 07:05:00] ERROR: boom"
        );
    }

    #[test]
    fn file_journal_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");
        {
            let mut j = FileJournal::open(&path).unwrap();
            j.info("first");
        }
        let mut j = FileJournal::open(&path).unwrap();
        assert_eq!(j.path(), path.as_path());
        j.error("second");
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('[') && lines[0].ends_with("] INFO: first"));
        assert!(lines[1].ends_with("] ERROR: second"));
        // "[YYYY-MM-DD HH:MM:SS]" is 21 chars
        assert_eq!(lines[0].find(']'), Some(20));
    }

    fn emit<J: Journal>(mut j: J) {
        j.info("a");
        j.error("b");
    }

    #[test]
    fn memory_journal_through_mut_ref() {
        let mut mem = MemoryJournal::new();
        emit(&mut mem);
        assert_eq!(mem.messages(), vec!["a", "b"]);
        assert_eq!(mem.entries[1].0, Level::Error);
    }
}

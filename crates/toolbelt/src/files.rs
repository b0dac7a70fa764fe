//! Directory copy and per-file line counting, journaled.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::journal::Journal;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FilesError + '_ {
    move |source| FilesError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// What `copy_dir` copied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files: usize,
    pub dirs: usize,
}

/// Recursively copy the contents of `source` into `target`.
///
/// `target` and any missing parents are created. Files are overwritten and keep
/// their permissions and modification time. Symlinks are followed.
pub fn copy_dir<J: Journal>(
    source: &Path,
    target: &Path,
    journal: &mut J,
) -> Result<CopyReport, FilesError> {
    if !source.exists() {
        let err = FilesError::SourceNotFound(source.to_path_buf());
        journal.error(&err.to_string());
        return Err(err);
    }
    let mut report = CopyReport::default();
    copy_into(source, target, journal, &mut report)?;
    Ok(report)
}

fn copy_into<J: Journal>(
    source: &Path,
    target: &Path,
    journal: &mut J,
    report: &mut CopyReport,
) -> Result<(), FilesError> {
    fs::create_dir_all(target).map_err(io_err(target))?;
    journal.info(&format!(
        "Created/verified target directory: {}",
        target.display()
    ));
    report.dirs += 1;

    let mut entries = fs::read_dir(source)
        .map_err(io_err(source))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err(source))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let from = entry.path();
        let to = target.join(entry.file_name());
        if from.is_dir() {
            copy_into(&from, &to, journal, report)?;
        } else {
            copy_file(&from, &to)?;
            journal.info(&format!(
                "Copied file: {}",
                entry.file_name().to_string_lossy()
            ));
            report.files += 1;
        }
    }
    Ok(())
}

fn copy_file(from: &Path, to: &Path) -> Result<(), FilesError> {
    fs::copy(from, to).map_err(io_err(from))?;
    let mtime = fs::metadata(from)
        .and_then(|m| m.modified())
        .map_err(io_err(from))?;
    fs::File::options()
        .write(true)
        .open(to)
        .and_then(|f| f.set_modified(mtime))
        .map_err(io_err(to))
}

/// Which files `count_lines` looks at.
#[derive(Clone, Debug)]
pub struct ScanCfg {
    /// Extensions including the leading dot, e.g. `".txt"`.
    pub extensions: Vec<String>,
    /// Count through symlinked files and directories. Off: links are skipped.
    pub follow_links: bool,
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self {
            extensions: vec![".txt".to_string(), ".log".to_string()],
            follow_links: false,
        }
    }
}

impl ScanCfg {
    fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self
                .extensions
                .iter()
                .any(|want| want.strip_prefix('.') == Some(ext)),
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineCount {
    /// File name without directories.
    pub name: String,
    pub lines: usize,
}

/// Count lines of every matching file under `dir`, recursively, in file-name order.
///
/// Unreadable files (including non-UTF-8 content) are journaled at `ERROR` and
/// skipped. A missing `dir` is an error.
pub fn count_lines<J: Journal>(
    dir: &Path,
    cfg: &ScanCfg,
    journal: &mut J,
) -> Result<Vec<LineCount>, FilesError> {
    if !dir.is_dir() {
        return Err(FilesError::SourceNotFound(dir.to_path_buf()));
    }
    let mut out = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(cfg.follow_links)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !cfg.matches(entry.path()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match fs::read_to_string(entry.path()) {
            Ok(text) => {
                journal.info(&format!("Processed file: {name}"));
                out.push(LineCount {
                    name,
                    lines: text.lines().count(),
                });
            }
            Err(err) => journal.error(&format!("Error processing {name}: {err}")),
        }
    }
    Ok(out)
}

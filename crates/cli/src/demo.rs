//! Scripted walkthrough of every utility with fixed sample inputs.

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use toolbelt::files::{copy_dir, count_lines, FilesError, ScanCfg};
use toolbelt::geom2::Polygon;
use toolbelt::journal::Journal;
use toolbelt::store::DataStore;
use toolbelt::words::top_k_words;

pub const SAMPLE_TEXT: &str =
    "Hello world! Hello everyone. This is a simple test. Test, test, hello.";

pub fn run<J: Journal, W: Write>(
    source: &Path,
    target: &Path,
    journal: &mut J,
    out: &mut W,
) -> Result<()> {
    let mut storage = DataStore::new(&mut *journal);
    storage.add("key1", "value1");
    storage.add("key2", "value2");
    writeln!(out, "{}", py_dict(&storage.list()))?;
    writeln!(out, "{}", storage.get("key1").unwrap_or("Key not found"))?;
    storage.delete("key1");
    drop(storage);

    let top = top_k_words(SAMPLE_TEXT, 2);
    writeln!(out, "{}", py_pairs(top.iter().map(|(w, c)| (w.as_str(), *c))))?;

    let a = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])?;
    let b = Polygon::from_xy(&[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)])?;
    let contact = a.contact(&b);
    tracing::info!(?contact, "sample squares");
    writeln!(out, "{}", if contact.is_some() { "True" } else { "False" })?;

    match copy_dir(source, target, journal) {
        Ok(report) => {
            tracing::info!(files = report.files, dirs = report.dirs, "copied");
            let counts = count_lines(source, &ScanCfg::default(), journal)?;
            let pairs = counts.iter().map(|lc| (lc.name.as_str(), lc.lines));
            writeln!(out, "{}", py_pairs(pairs))?;
        }
        Err(err @ FilesError::SourceNotFound(_)) => {
            journal.error(&format!("File operation error: {err}"));
            tracing::warn!(%err, "skipping file operations");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Quote like Python's `repr(str)`: single quotes unless the text holds a `'`
/// and no `"`.
fn py_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `{'k': 'v', ...}`
fn py_dict(map: &BTreeMap<String, String>) -> String {
    let items: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{}: {}", py_str(k), py_str(v)))
        .collect();
    format!("{{{}}}", items.join(", "))
}

/// `[('a', 1), ...]`
fn py_pairs<'a, I: IntoIterator<Item = (&'a str, usize)>>(pairs: I) -> String {
    let items: Vec<String> = pairs
        .into_iter()
        .map(|(s, n)| format!("({}, {n})", py_str(s)))
        .collect();
    format!("[{}]", items.join(", "))
}

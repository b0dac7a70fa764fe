//! In-memory key-value store that journals every operation.

use std::collections::BTreeMap;

use crate::journal::Journal;

/// String map with add/get/delete/list; single owner, no persistence.
#[derive(Debug)]
pub struct DataStore<J: Journal> {
    data: BTreeMap<String, String>,
    journal: J,
}

impl<J: Journal> DataStore<J> {
    pub fn new(mut journal: J) -> Self {
        journal.info("DataStorage initialized");
        Self {
            data: BTreeMap::new(),
            journal,
        }
    }

    /// Insert or overwrite.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.journal.info(&format!("Added/Updated key: {key}"));
        self.data.insert(key, value.into());
    }

    /// Lookup; the read is journaled even on a miss.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        self.journal.info(&format!("Retrieved key: {key}"));
        self.data.get(key).map(String::as_str)
    }

    /// Remove `key`; returns whether it was present. Only hits are journaled.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.data.remove(key).is_some();
        if removed {
            self.journal.info(&format!("Deleted key: {key}"));
        }
        removed
    }

    /// Snapshot of all entries, ordered by key.
    pub fn list(&mut self) -> BTreeMap<String, String> {
        self.journal.info("Listed all data");
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_journal(self) -> J {
        self.journal
    }
}

//! Persistent entry log backed by a JSON file.
//!
//! The whole log is one JSON array of [`TimeEntry`] records in the
//! application data directory. It is read once on open and written back in
//! full after every mutation.
//!
//! The array is kept sorted newest-first by (date, start). Table views
//! print entries in storage order, so a row index shown by `kintai log` is
//! a stable handle for `record --edit` and `delete` until the next
//! mutation.

use crate::libs::data_storage::DataStorage;
use crate::libs::entry::TimeEntry;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "kintai_log.json";

pub struct EntryLog {
    path: PathBuf,
    pub entries: Vec<TimeEntry>,
}

impl EntryLog {
    /// Opens the log, loading existing entries; a missing file is an empty
    /// log.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(LOG_FILE_NAME)?;
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };

        Ok(Self { path, entries })
    }

    /// Writes the log back to disk, pretty-printed.
    pub fn save(&self) -> Result<()> {
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &self.entries)?;
        Ok(())
    }

    /// Appends an entry and re-sorts.
    pub fn insert(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
        self.sort();
    }

    /// Overwrites the entry at `index`, re-sorting afterwards.
    pub fn update(&mut self, index: usize, entry: TimeEntry) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                self.sort();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<TimeEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Replaces the whole log, e.g. from an imported file.
    pub fn replace(&mut self, entries: Vec<TimeEntry>) {
        self.entries = entries;
        self.sort();
    }

    /// Newest first by (date, start); ties keep insertion order.
    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| (b.date.as_str(), b.start.as_str()).cmp(&(a.date.as_str(), a.start.as_str())));
    }
}

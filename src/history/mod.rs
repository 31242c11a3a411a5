//! Transformation history: a bounded most-recently-used list.
//!
//! - `add` moves an existing equal entry to the front instead of duplicating it.
//! - The list never holds more than its capacity; the oldest entries fall off.
//! - Not synchronized; share across threads only behind a lock.

mod service;
mod store;

pub use service::HistoryService;
pub use store::{HistoryRepository, JsonHistoryStore};

use serde::{Deserialize, Serialize};

use crate::errors::RenameError;
use crate::strategy::{RenameStrategy, build_strategy};

/// Default capacity of the history list.
pub const MAX_HISTORY_SIZE: usize = 100;

/// Parameters of one transformation. Equality is over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub is_regex: bool,
    #[serde(default)]
    pub case_insensitive: bool,
}

impl HistoryEntry {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        is_regex: bool,
        case_insensitive: bool,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            is_regex,
            case_insensitive,
        }
    }

    /// Build the strategy these parameters describe.
    pub fn strategy(&self) -> Result<Box<dyn RenameStrategy>, RenameError> {
        build_strategy(
            &self.pattern,
            &self.replacement,
            self.is_regex,
            self.case_insensitive,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `entry` as the most recent one.
    pub fn add(&mut self, entry: HistoryEntry) {
        if let Some(i) = self.entries.iter().position(|e| *e == entry) {
            // Shift [0, i) back one slot; the equal entry lands at the front.
            self.entries[..=i].rotate_right(1);
            self.entries[0] = entry;
            return;
        }

        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the list wholesale. `entries` must already be deduplicated and
    /// most-recent-first; anything past the capacity is dropped.
    pub fn set_entries(&mut self, mut entries: Vec<HistoryEntry>) {
        entries.truncate(self.capacity);
        self.entries = entries;
    }
}

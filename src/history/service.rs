//! History use case: keeps the in-memory list and persists after every change.

use tracing::warn;

use super::{History, HistoryEntry, HistoryRepository};
use crate::errors::RenameError;

#[derive(Debug)]
pub struct HistoryService<R> {
    repository: R,
    history: History,
}

impl<R: HistoryRepository> HistoryService<R> {
    /// Load existing history; an unreadable store starts empty.
    pub fn new(repository: R) -> Self {
        let history = match repository.load() {
            Ok(h) => h,
            Err(e) => {
                warn!(code = e.code(), kind = e.kind(), "{e}; starting with empty history");
                History::new()
            }
        };
        Self { repository, history }
    }

    pub fn add_entry(&mut self, entry: HistoryEntry) -> Result<(), RenameError> {
        self.history.add(entry);
        self.repository.save(&self.history)
    }

    /// Reload from the repository so edits by other runs are picked up.
    pub fn entries(&mut self) -> Result<Vec<HistoryEntry>, RenameError> {
        self.history = self.repository.load()?;
        Ok(self.history.entries().to_vec())
    }

    pub fn clear(&mut self) -> Result<(), RenameError> {
        self.history.clear();
        self.repository.save(&self.history)
    }

    /// Current in-memory list without touching the repository.
    pub fn cached(&self) -> &History {
        &self.history
    }
}

//! JSON persistence for the history list.
//!
//! Document layout (most recent first):
//! ```json
//! {
//!   "entries": [
//!     { "pattern": "IMG_", "replacement": "", "isRegex": false, "caseInsensitive": false }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{History, HistoryEntry};
use crate::errors::RenameError;
use crate::platform::write_file_atomic;

/// Load/save contract used by `HistoryService`.
pub trait HistoryRepository {
    fn load(&self) -> Result<History, RenameError>;
    fn save(&self, history: &History) -> Result<(), RenameError>;
}

#[derive(Debug, Serialize)]
struct HistoryDocumentOut<'a> {
    entries: &'a [HistoryEntry],
}

#[derive(Debug, Deserialize)]
struct HistoryDocumentIn {
    #[serde(default)]
    entries: Option<Vec<HistoryEntry>>,
}

/// History stored as an indented JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryRepository for JsonHistoryStore {
    /// A missing file is an empty history, not an error.
    fn load(&self) -> Result<History, RenameError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(History::new());
            }
            Err(e) => return Err(RenameError::persistence(&self.path, e)),
        };

        let doc: HistoryDocumentIn =
            serde_json::from_slice(&bytes).map_err(|e| RenameError::persistence(&self.path, e))?;

        // Re-add oldest first so the final order matches the file and any
        // duplicates or overflow in a hand-edited file are normalized.
        let mut history = History::new();
        for entry in doc.entries.unwrap_or_default().into_iter().rev() {
            history.add(entry);
        }
        debug!(path = %self.path.display(), count = history.len(), "loaded history");
        Ok(history)
    }

    /// Write the whole list, creating parent directories as needed.
    fn save(&self, history: &History) -> Result<(), RenameError> {
        let doc = HistoryDocumentOut {
            entries: history.entries(),
        };
        let mut json =
            serde_json::to_vec_pretty(&doc).map_err(|e| RenameError::persistence(&self.path, e))?;
        json.push(b'\n');

        write_file_atomic(&self.path, &json).map_err(|e| RenameError::persistence(&self.path, e))?;
        debug!(path = %self.path.display(), count = history.len(), "saved history");
        Ok(())
    }
}

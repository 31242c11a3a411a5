//! Rename session: the current batch, the last previewed transformation, and history.
//!
//! Flow: `load_files` -> `generate_preview` (any number of times) -> `execute_rename`.
//! After execution the batch is rebuilt from the resulting paths, so the next
//! transformation applies to the renamed files. The last transformation stays
//! selected; executing again without a new preview renames nothing and reports
//! the current paths.

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::engine::{RenameEngine, RenameOutcome};
use crate::errors::RenameError;
use crate::file_record::{FileRecord, records_from_paths};
use crate::fs_ops::FileSystem;
use crate::history::{HistoryEntry, HistoryRepository, HistoryService};
use crate::preview::{FilePreview, generate_preview};

#[derive(Debug)]
pub struct RenameSession<F, R> {
    engine: RenameEngine<F>,
    history: HistoryService<R>,
    files: Vec<FileRecord>,
    current: Option<HistoryEntry>,
}

impl<F: FileSystem, R: HistoryRepository> RenameSession<F, R> {
    pub fn new(engine: RenameEngine<F>, history: HistoryService<R>) -> Self {
        Self {
            engine,
            history,
            files: Vec::new(),
            current: None,
        }
    }

    /// Replace the current batch. Any earlier preview is discarded.
    pub fn load_files<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = records_from_paths(paths);
        self.current = None;
        debug!(count = self.files.len(), "loaded batch");
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Compute proposed names for the current batch.
    ///
    /// An invalid pattern fails here and leaves the session untouched.
    pub fn generate_preview(
        &mut self,
        pattern: &str,
        replacement: &str,
        is_regex: bool,
        case_insensitive: bool,
    ) -> Result<Vec<FilePreview>, RenameError> {
        if self.files.is_empty() {
            return Ok(Vec::new());
        }

        let entry = HistoryEntry::new(pattern, replacement, is_regex, case_insensitive);
        let strategy = entry.strategy()?;

        self.files = generate_preview(&self.files, strategy.as_ref());
        self.current = Some(entry);
        Ok(self.files.iter().map(FilePreview::from).collect())
    }

    /// Rename the previewed batch. Without a preview this does nothing.
    ///
    /// When at least one file was renamed the transformation is recorded in
    /// history; a failure to save it is logged and does not affect the outcome.
    pub fn execute_rename(&mut self) -> RenameOutcome {
        let Some(entry) = self.current.clone() else {
            debug!("execute requested without a preview; nothing to do");
            return RenameOutcome::default();
        };

        let outcome = self.engine.execute(&self.files);

        self.files = records_from_paths(outcome.new_paths.iter().cloned());

        if outcome.success_count > 0
            && let Err(e) = self.history.add_entry(entry)
        {
            warn!(code = e.code(), kind = e.kind(), "could not record transformation: {e}");
        }

        outcome
    }

    /// Past transformations, most recent first (reloaded from storage).
    pub fn history(&mut self) -> Result<Vec<HistoryEntry>, RenameError> {
        self.history.entries()
    }

    pub fn add_to_history(&mut self, entry: HistoryEntry) -> Result<(), RenameError> {
        self.history.add_entry(entry)
    }

    pub fn clear_history(&mut self) -> Result<(), RenameError> {
        self.history.clear()
    }
}

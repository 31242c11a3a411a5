//! Rename execution.
//!
//! Files are processed strictly in batch order. A file that cannot be renamed is
//! recorded and skipped; the rest of the batch still runs and nothing is rolled back.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::RenameError;
use crate::file_record::FileRecord;
use crate::fs_ops::{DEFAULT_MAX_PROBE_ATTEMPTS, FileSystem, describe_io_error, next_free_name};

/// Aggregate result of one `execute` call.
///
/// `new_paths` is parallel to the input batch: the new path for renamed files,
/// the original path for unchanged or failed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOutcome {
    pub success_count: usize,
    pub failure_count: usize,
    pub errors: Vec<String>,
    pub new_paths: Vec<PathBuf>,
}

impl RenameOutcome {
    fn with_capacity(n: usize) -> Self {
        Self {
            new_paths: Vec::with_capacity(n),
            ..Default::default()
        }
    }

    fn record_failure(&mut self, record: &FileRecord, err: RenameError) {
        warn!(
            code = err.code(),
            kind = err.kind(),
            path = %record.original_path().display(),
            "{err}"
        );
        self.failure_count += 1;
        self.errors.push(err.to_string());
        self.new_paths.push(record.original_path().to_path_buf());
    }
}

#[derive(Debug, Clone)]
pub struct RenameEngine<F> {
    fs: F,
    max_probe_attempts: u32,
}

impl<F: FileSystem> RenameEngine<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            max_probe_attempts: DEFAULT_MAX_PROBE_ATTEMPTS,
        }
    }

    /// Override the number of numeric suffixes tried when the target name is taken.
    pub fn with_max_probe_attempts(mut self, attempts: u32) -> Self {
        self.max_probe_attempts = attempts;
        self
    }

    pub fn max_probe_attempts(&self) -> u32 {
        self.max_probe_attempts
    }

    /// Rename every changed record of a previewed batch.
    pub fn execute(&self, batch: &[FileRecord]) -> RenameOutcome {
        let mut outcome = RenameOutcome::with_capacity(batch.len());

        for record in batch {
            if !record.has_changed() {
                debug!(path = %record.original_path().display(), "unchanged; skipping");
                outcome.new_paths.push(record.original_path().to_path_buf());
                continue;
            }

            let target = match self.resolve_target(record) {
                Ok(t) => t,
                Err(e) => {
                    outcome.record_failure(record, e);
                    continue;
                }
            };

            match self.fs.rename(record.original_path(), &target) {
                Ok(()) => {
                    info!(src = %record.original_path().display(), dest = %target.display(), "Renamed file");
                    outcome.success_count += 1;
                    outcome.new_paths.push(target);
                }
                Err(e) => {
                    let err = RenameError::RenameFailed {
                        name: record.original_name().to_string(),
                        cause: describe_io_error(&e),
                    };
                    outcome.record_failure(record, err);
                }
            }
        }

        info!(
            success = outcome.success_count,
            failure = outcome.failure_count,
            total = batch.len(),
            "Rename batch finished"
        );
        outcome
    }

    /// Proposed path, or the first free numbered variant when it is already taken.
    fn resolve_target(&self, record: &FileRecord) -> Result<PathBuf, RenameError> {
        if !is_single_file_name(record.new_name()) {
            return Err(RenameError::InvalidTargetName {
                name: record.original_name().to_string(),
                proposed: record.new_name().to_string(),
            });
        }

        let target = record.new_path();
        if target == record.original_path() || !self.fs.exists(&target) {
            return Ok(target);
        }

        debug!(target = %target.display(), "target exists; probing numbered names");
        next_free_name(
            &self.fs,
            record.directory(),
            record.new_name(),
            self.max_probe_attempts,
        )
        .ok_or_else(|| RenameError::ConflictResolutionExhausted {
            name: record.original_name().to_string(),
            attempts: self.max_probe_attempts,
        })
    }
}

/// A renamed file stays in its directory: exactly one normal path component.
fn is_single_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

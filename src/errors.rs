//! Typed error definitions for batch_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Invalid pattern '{pattern}': {source}")]
    PatternCompilation {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to rename {name}: no free name found within {attempts} attempts")]
    ConflictResolutionExhausted { name: String, attempts: u32 },

    #[error("Failed to rename {name}: {cause}")]
    RenameFailed { name: String, cause: String },

    #[error("Failed to rename {name}: proposed name {proposed:?} is not a single file name")]
    InvalidTargetName { name: String, proposed: String },

    #[error("History persistence failed for {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistenceSource,
    },
}

/// Underlying cause of a history load/save failure.
#[derive(Debug, Error)]
pub enum PersistenceSource {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid history document: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenameError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            RenameError::PatternCompilation { .. } => 10,
            RenameError::ConflictResolutionExhausted { .. } => 20,
            RenameError::RenameFailed { .. } => 21,
            RenameError::InvalidTargetName { .. } => 22,
            RenameError::Persistence { .. } => 30,
        }
    }

    /// Short machine-friendly slug for log filtering.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::PatternCompilation { .. } => "pattern_compilation",
            RenameError::ConflictResolutionExhausted { .. } => "conflict_resolution_exhausted",
            RenameError::RenameFailed { .. } => "rename_failed",
            RenameError::InvalidTargetName { .. } => "invalid_target_name",
            RenameError::Persistence { .. } => "persistence",
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: impl Into<PersistenceSource>) -> Self {
        RenameError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }
}

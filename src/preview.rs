//! Preview generation: compute proposed names without touching disk.

use serde::Serialize;
use std::path::PathBuf;

use crate::file_record::FileRecord;
use crate::strategy::RenameStrategy;

/// Apply `strategy` to every record's original name and return the proposed batch.
///
/// The input is left untouched. Each proposal starts from `original_name`, so
/// previewing again with another strategy replaces the earlier proposal.
pub fn generate_preview(batch: &[FileRecord], strategy: &dyn RenameStrategy) -> Vec<FileRecord> {
    batch
        .iter()
        .map(|record| {
            let mut next = record.clone();
            next.set_new_name(strategy.apply(record.original_name()));
            next
        })
        .collect()
}

/// Serializable view of one previewed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePreview {
    pub original_path: PathBuf,
    pub original_name: String,
    pub new_name: String,
    pub has_changed: bool,
}

impl From<&FileRecord> for FilePreview {
    fn from(record: &FileRecord) -> Self {
        Self {
            original_path: record.original_path().to_path_buf(),
            original_name: record.original_name().to_string(),
            new_name: record.new_name().to_string(),
            has_changed: record.has_changed(),
        }
    }
}

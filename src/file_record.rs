//! A file queued for renaming: where it lives now and the name it is about to get.

use std::path::{Path, PathBuf};

/// One entry of a rename batch.
///
/// `original_path`, `original_name` and `directory` are fixed at construction;
/// only the proposed `new_name` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    original_path: PathBuf,
    original_name: String,
    directory: PathBuf,
    new_name: String,
}

impl FileRecord {
    /// Build a record from a path. A bare file name lives in `.`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let original_path = path.into();
        let original_name = original_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| original_path.to_string_lossy().into_owned());
        let directory = match original_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            new_name: original_name.clone(),
            original_path,
            original_name,
            directory,
        }
    }

    pub fn original_path(&self) -> &Path {
        &self.original_path
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn set_new_name(&mut self, name: impl Into<String>) {
        self.new_name = name.into();
    }

    /// Full path the file would have after renaming.
    pub fn new_path(&self) -> PathBuf {
        self.directory.join(&self.new_name)
    }

    #[inline]
    pub fn has_changed(&self) -> bool {
        self.original_name != self.new_name
    }
}

/// Build a batch from paths, preserving order.
pub fn records_from_paths<I, P>(paths: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths.into_iter().map(FileRecord::new).collect()
}

//! Duplicate-name resolution.
//!
//! Policy:
//! - The proposed path is used as-is when nothing occupies it.
//! - Otherwise the proposed name is split into base and extension and candidates
//!   `base1.ext`, `base2.ext`, ... are probed in order until one is free.
//! - The search is bounded; callers get `None` when every candidate is taken.
//!
//! Notes:
//! - This only decides the path name based on current filesystem state as seen
//!   through the `FileSystem` trait. Within one batch, renames are applied in order,
//!   so earlier files claim free slots first.

use std::path::{Path, PathBuf};
use tracing::trace;

use super::FileSystem;

/// Default upper bound on numeric suffixes tried per file.
pub const DEFAULT_MAX_PROBE_ATTEMPTS: u32 = 1000;

/// Split a file name into base and extension (extension keeps its leading dot).
///
/// Examples:
/// - "photo.jpg" -> ("photo", ".jpg")
/// - "archive.tar.gz" -> ("archive.tar", ".gz")
/// - ".env" -> (".env", "")
/// - "README" -> ("README", "")
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}

/// Find a free path for `name` inside `dir` by appending 1, 2, ... before the extension.
///
/// Returns the first free candidate, or `None` after `max_attempts` occupied candidates.
/// The unsuffixed name is not probed here; callers only come here after it was found taken.
pub fn next_free_name<F>(fs: &F, dir: &Path, name: &str, max_attempts: u32) -> Option<PathBuf>
where
    F: FileSystem + ?Sized,
{
    let (base, ext) = split_name(name);
    let mut collisions = 0u32;

    for n in 1..=max_attempts {
        let candidate = dir.join(format!("{base}{n}{ext}"));
        if !fs.exists(&candidate) {
            return Some(candidate);
        }
        collisions = collisions.saturating_add(1);
        if collisions == 3 {
            trace!(name, dir = %dir.display(), "duplicate: experiencing multiple collisions, continuing to search unique suffix");
        }
    }
    None
}

//! Rename helper.
//! - Performs a single `fs::rename` (same directory, so it is atomic on local filesystems).
//! - Never removes an existing destination; collision handling happens before we get here.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

pub fn rename_in_place(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    // Unix: fsync the destination directory to persist the rename (best-effort).
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}

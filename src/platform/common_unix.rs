//! Unix atomic write with 0600 mode and parent directory fsync.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use super::temp::tmp_sibling_name;
use crate::fs_ops::io_error_with_help_io;

/// Atomically write `contents` to `path` with 0600 permissions on the file,
/// ensuring durability by fsync-ing the temp file and the parent directory.
///
/// Steps:
/// - Ensure parent directory exists
/// - Create unique hidden temp sibling with mode 0600 and O_EXCL semantics
/// - Write contents, fsync temp, rename to destination, fsync parent dir
/// - On failure, remove the temp file best-effort and return the error
pub fn atomic_write_0600(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error_with_help_io("create directory", parent))?;

    let tmp = tmp_sibling_name(path);

    let write_tmp = || -> io::Result<()> {
        let mut f = OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(&tmp)?;
        f.write_all(contents)?;
        f.sync_all()
    };
    if let Err(e) = write_tmp() {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help_io("write temp file", &tmp)(e));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help_io("replace", path)(e));
    }

    let dir_file = File::open(parent).map_err(io_error_with_help_io("open directory", parent))?;
    dir_file.sync_all()
}

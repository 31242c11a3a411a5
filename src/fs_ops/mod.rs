//! Filesystem operations used by the rename engine.
//!
//! The engine talks to disk only through `FileSystem`, so tests can swap in
//! fakes that fail on demand.

mod atomic;
mod collect;
mod duplicate;
mod helpers;
#[cfg(unix)]
mod util;

pub use collect::collect_files;
pub use duplicate::{DEFAULT_MAX_PROBE_ATTEMPTS, next_free_name, split_name};
pub use helpers::{describe_io_error, io_error_with_help, io_error_with_help_io};

use std::io;
use std::path::Path;

/// The two primitives the engine needs from a filesystem.
pub trait FileSystem {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// `std::fs`-backed implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        atomic::rename_in_place(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as occupied.
        std::fs::symlink_metadata(path).is_ok()
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

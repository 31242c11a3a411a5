//! Expand command-line inputs into an ordered batch of files.
//!
//! - A file argument is kept as given, in argument order.
//! - A directory argument contributes the regular files directly inside it,
//!   sorted by name. Subdirectories are not descended into.
//! - Paths that do not exist are kept so the rename reports them per file.
//! - A path listed twice (directly or via a directory) is kept once.

use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

pub fn collect_files<I>(inputs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            if seen.insert(input.clone()) {
                out.push(input);
            }
            continue;
        }

        let walker = WalkDir::new(&input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            match entry {
                Ok(e) if e.file_type().is_file() => {
                    let p = e.into_path();
                    if seen.insert(p.clone()) {
                        out.push(p);
                    }
                }
                Ok(_) => {}
                Err(err) => warn!(dir = %input.display(), error = %err, "skipping unreadable entry"),
            }
        }
    }
    out
}

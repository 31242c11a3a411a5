//! Core library for `batch_rename`.
//!
//! Build a strategy from a pattern, preview what it does to a batch of file
//! names, then rename the batch without clobbering existing files. Past
//! transformations are kept in a small JSON-backed history for reuse.

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod file_record;
pub mod fs_ops;
pub mod history;
pub mod output;
pub mod platform;
pub mod preview;
pub mod session;
pub mod strategy;

pub use config::{
    Config, LogLevel, default_config_path, default_history_path, default_log_path,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use engine::{RenameEngine, RenameOutcome};
pub use errors::{PersistenceSource, RenameError};
pub use file_record::FileRecord;
pub use fs_ops::{FileSystem, StdFileSystem};
pub use history::{
    History, HistoryEntry, HistoryRepository, HistoryService, JsonHistoryStore, MAX_HISTORY_SIZE,
};
pub use preview::{FilePreview, generate_preview};
pub use session::RenameSession;
pub use strategy::{
    CaseInsensitive, ExactMatch, PatternSource, RegexMatch, RenameStrategy, build_strategy,
};

/// Build a session wired to the real filesystem and the configured history file.
pub fn session_from_config(cfg: &Config) -> RenameSession<StdFileSystem, JsonHistoryStore> {
    let engine = RenameEngine::new(StdFileSystem).with_max_probe_attempts(cfg.max_probe_attempts);
    let history = HistoryService::new(JsonHistoryStore::new(&cfg.history_file));
    RenameSession::new(engine, history)
}

/// Convenience re-exports for downstream users.
pub mod prelude {
    pub use crate::config::{Config, LogLevel, default_config_path};
    pub use crate::engine::{RenameEngine, RenameOutcome};
    pub use crate::errors::RenameError as Error;
    pub use crate::file_record::FileRecord;
    pub use crate::fs_ops::{FileSystem, StdFileSystem};
    pub use crate::history::{HistoryEntry, JsonHistoryStore};
    pub use crate::preview::generate_preview;
    pub use crate::session::RenameSession;
    pub use crate::session_from_config;
    pub use crate::strategy::{RenameStrategy, build_strategy};

    /// Result alias used across the library.
    pub type BRResult<T> = std::result::Result<T, Error>;
}

//! Config module.
//! Provides configuration types, default paths and XML loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{
    CONFIG_ENV_VAR, default_config_path, default_history_path, default_log_path,
    path_has_symlink_ancestor,
};
pub use types::{Config, LogLevel};
pub use xml::{LoadResult, create_template_config, load_config_from_xml_path, load_or_init};

/// Directory name used under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "batch_rename";
pub const CONFIG_FILE_NAME: &str = "config.xml";
pub const HISTORY_FILE_NAME: &str = "history.json";
pub const LOG_FILE_NAME: &str = "batch_rename.log";

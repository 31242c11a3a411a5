//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/history/log paths and detects symlinked ancestors.
//!
//! When `BATCH_RENAME_CONFIG` points somewhere explicit, the history and log
//! files are colocated with that config so a whole setup can live in one folder.

use anyhow::{Result, anyhow};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{APP_DIR_NAME, CONFIG_FILE_NAME, HISTORY_FILE_NAME, LOG_FILE_NAME};

/// Environment variable naming an explicit config file (or a directory holding `config.xml`).
pub const CONFIG_ENV_VAR: &str = "BATCH_RENAME_CONFIG";

/// Config file named by `BATCH_RENAME_CONFIG`, if set and non-empty.
fn env_config_path() -> Option<PathBuf> {
    let raw = env::var_os(CONFIG_ENV_VAR)?;
    if raw.is_empty() {
        return None;
    }
    let p = PathBuf::from(raw);
    if p.is_dir() {
        Some(p.join(CONFIG_FILE_NAME))
    } else {
        Some(p)
    }
}

fn home_fallback(parts: &[&str]) -> Result<PathBuf> {
    let home = env::var_os("HOME").ok_or_else(|| anyhow!("cannot determine a config directory: HOME is not set"))?;
    let mut p = PathBuf::from(home);
    for part in parts {
        p.push(part);
    }
    Ok(p)
}

/// OS-appropriate config path, honoring `BATCH_RENAME_CONFIG`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env_config_path() {
        return Ok(p);
    }
    match config_dir() {
        Some(base) => Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        None => home_fallback(&[".config", APP_DIR_NAME, CONFIG_FILE_NAME]),
    }
}

/// Default history document location.
pub fn default_history_path() -> Result<PathBuf> {
    if let Some(p) = env_config_path() {
        return Ok(sibling_of(&p, HISTORY_FILE_NAME));
    }
    match config_dir() {
        Some(base) => Ok(base.join(APP_DIR_NAME).join(HISTORY_FILE_NAME)),
        None => home_fallback(&[".config", APP_DIR_NAME, HISTORY_FILE_NAME]),
    }
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(p) = env_config_path() {
        return Ok(sibling_of(&p, LOG_FILE_NAME));
    }
    match data_dir() {
        Some(base) => Ok(base.join(APP_DIR_NAME).join(LOG_FILE_NAME)),
        None => home_fallback(&[".local", "share", APP_DIR_NAME, LOG_FILE_NAME]),
    }
}

fn sibling_of(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template at the default location if missing.
//!
//! Example:
//! <config>
//!   <history_file>/path/to/history.json</history_file>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/batch_rename.log</log_file>
//!   <max_probe_attempts>1000</max_probe_attempts>
//! </config>
//!
//! Unknown fields are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{CONFIG_ENV_VAR, default_config_path, default_history_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::fs_ops::{DEFAULT_MAX_PROBE_ATTEMPTS, io_error_with_help};
use crate::platform::{set_dir_mode_0700, write_file_atomic};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "history_file")]
    history_file: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "max_probe_attempts", default, deserialize_with = "de_u32_trimmed_opt")]
    max_probe_attempts: Option<u32>,
}

// Custom deserializer that trims surrounding whitespace for optional u32
fn de_u32_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u32>().ok()))
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(p) = non_empty_path(parsed.history_file.as_deref()) {
        cfg.history_file = p;
    }
    if let Some(p) = non_empty_path(parsed.log_file.as_deref()) {
        cfg.log_file = Some(p);
    }
    if let Some(level) = parsed
        .log_level
        .as_deref()
        .and_then(|s| s.trim().parse::<LogLevel>().ok())
    {
        cfg.log_level = level;
    }
    if let Some(n) = parsed.max_probe_attempts.filter(|n| *n > 0) {
        cfg.max_probe_attempts = n;
    }

    cfg
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// What `load_or_init` found.
#[derive(Debug)]
pub enum LoadResult {
    /// Config parsed from this file.
    Loaded(Config, PathBuf),
    /// No config at the default location; a template was written there and defaults apply.
    CreatedTemplate(Config, PathBuf),
    /// No config available; defaults apply.
    Defaults(Config),
}

impl LoadResult {
    pub fn into_config(self) -> Config {
        match self {
            LoadResult::Loaded(c, _) | LoadResult::CreatedTemplate(c, _) | LoadResult::Defaults(c) => c,
        }
    }
}

/// Resolve and load the config file.
///
/// - `BATCH_RENAME_CONFIG` set but missing: defaults, no template.
/// - Default location missing: write a template (best-effort) and use defaults.
/// - Present: parse it; parse errors (including unknown fields) are returned.
pub fn load_or_init() -> Result<LoadResult> {
    let explicit = env::var_os(CONFIG_ENV_VAR).is_some_and(|v| !v.is_empty());
    let path = default_config_path()?;

    if path.exists() {
        let cfg = load_config_from_xml_path(&path)?;
        debug!(path = %path.display(), "loaded config");
        return Ok(LoadResult::Loaded(cfg, path));
    }

    if explicit {
        debug!(path = %path.display(), "explicit config missing; using defaults");
        return Ok(LoadResult::Defaults(Config::default()));
    }

    match create_template_config(&path) {
        Ok(()) => Ok(LoadResult::CreatedTemplate(Config::default(), path)),
        Err(e) => {
            debug!(error = %e, "could not write template config; using defaults");
            Ok(LoadResult::Defaults(Config::default()))
        }
    }
}

/// Create default template config file and parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help("create config directory", parent))?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_history = default_history_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/history.json".into());
    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/batch_rename.log".into());

    let content = format!(
        "<!--\n  batch_rename configuration (XML)\n\n    history_file        -> JSON file holding the most recent transformations\n    log_level           -> quiet | normal | info | debug\n    log_file            -> path to log file (optional; stdout/stderr still used)\n    max_probe_attempts  -> numbered names tried (name1.ext, name2.ext, ...) when a target exists\n\n  CLI flags override XML values.\n-->\n<config>\n  <history_file>{}</history_file>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <max_probe_attempts>{}</max_probe_attempts>\n</config>\n",
        suggested_history, suggested_log, DEFAULT_MAX_PROBE_ATTEMPTS
    );

    write_file_atomic(path, content.as_bytes())
        .with_context(|| format!("write template config '{}'", path.display()))?;

    info!("Created template config at {}", path.display());
    Ok(())
}

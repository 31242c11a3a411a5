//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use crate::fs_ops::DEFAULT_MAX_PROBE_ATTEMPTS;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document holding past transformations
    pub history_file: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Numbered names tried per file when the target name is taken
    pub max_probe_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: paths::default_history_path()
                .unwrap_or_else(|_| PathBuf::from(super::HISTORY_FILE_NAME)),
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
            max_probe_attempts: DEFAULT_MAX_PROBE_ATTEMPTS,
        }
    }
}

impl Config {
    /// Construct a Config with an explicit history file; other fields use defaults.
    pub fn new(history_file: impl Into<PathBuf>) -> Self {
        Self {
            history_file: history_file.into(),
            ..Default::default()
        }
    }
}

//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `--reuse N` takes pattern, replacement and flags from history entry N (1 = most recent).
//!   Explicit `--pattern` wins over `--reuse`.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::history::HistoryEntry;

/// Preview and apply pattern-based renames to a batch of files.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Batch-rename files by exact text or regex, with preview and collision-safe naming"
)]
pub struct Args {
    /// Files to rename. Directories contribute the regular files directly inside them.
    #[arg(value_name = "PATHS", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Text (or regex with --regex) to search for in each file name.
    #[arg(short = 'p', long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Replacement text. With --regex, $1, $2, ... refer to capture groups.
    #[arg(short = 'r', long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub replacement: String,

    /// Treat PATTERN as a regular expression.
    #[arg(short = 'x', long)]
    pub regex: bool,

    /// Match case-insensitively.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Reuse history entry N (1 = most recent) as the transformation.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub reuse: Option<usize>,

    /// Show the preview but do not rename anything.
    #[arg(short = 'n', long, help = "Show the preview, but do not rename files")]
    pub dry_run: bool,

    /// Print stored transformations (most recent first) and exit.
    #[arg(long, help = "List past transformations and exit")]
    pub history: bool,

    /// Remove all stored transformations and exit.
    #[arg(long, help = "Clear the transformation history and exit")]
    pub clear_history: bool,

    /// Override the history file location (normally configured via XML).
    #[arg(long, value_hint = ValueHint::FilePath, help = "Override the history file location")]
    pub history_file: Option<PathBuf>,

    /// Override how many numbered names are tried when a target name is taken.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_probe_attempts: Option<u32>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where batch_rename will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by batch_rename and exit"
    )]
    pub print_config: bool,

    /// Emit logs, preview and result as JSON.
    #[arg(long, help = "Emit logs, preview and result as JSON")]
    pub json: bool,
}

impl Args {
    /// Input paths with surrounding quotes stripped.
    pub fn sanitized_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(|p| Self::sanitize_path(p)).collect()
    }

    #[inline]
    fn sanitize_path(p: &std::path::Path) -> PathBuf {
        Self::sanitize_str(&p.to_string_lossy())
    }

    #[inline]
    fn sanitize_str(s: &str) -> PathBuf {
        // Shell integrations on Windows sometimes pass paths with their quotes intact.
        let trimmed = s.trim();
        let inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        PathBuf::from(inner)
    }

    /// Transformation given explicitly on the command line, if any.
    pub fn explicit_transform(&self) -> Option<HistoryEntry> {
        self.pattern.as_ref().map(|p| {
            HistoryEntry::new(p.clone(), self.replacement.clone(), self.regex, self.ignore_case)
        })
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(h) = &self.history_file {
            cfg.history_file = h.clone();
        }
        if let Some(n) = self.max_probe_attempts {
            cfg.max_probe_attempts = n;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

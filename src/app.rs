//! Application orchestrator.
//! Loads/merges config, initializes logging, builds a session, then either manages
//! history or previews and applies a rename to the given files.

use anyhow::{Context, Result, anyhow, bail};
use serde_json::json;
use std::process::ExitCode;
use tracing::{debug, error};

use batch_rename::cli::Args;
use batch_rename::config::{LoadResult, load_or_init};
use batch_rename::fs_ops::collect_files;
use batch_rename::output as out;
use batch_rename::{HistoryEntry, RenameError, default_config_path, session_from_config};

use crate::logging::init_tracing;

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(batch_rename::config::CONFIG_ENV_VAR) {
        out::print_info(&format!("Using {} (explicit):\n  {}\n", batch_rename::config::CONFIG_ENV_VAR, cfg_env));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default batch_rename config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run without --print-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

fn log_rename_error(e: &RenameError) {
    error!(code = e.code(), kind = e.kind(), "{e}");
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }

    // Config before logging init; template notice goes straight to the user.
    let loaded = load_or_init()?;
    if let LoadResult::CreatedTemplate(_, path) = &loaded {
        out::print_notice(&format!("A template batch_rename config was written to: {}", path.display()));
    }
    let mut cfg = loaded.into_config();
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting batch_rename: {:?}", args);

    let mut session = session_from_config(&cfg);

    if args.clear_history {
        session.clear_history().inspect_err(log_rename_error)?;
        out::print_success("History cleared.");
        return Ok(ExitCode::SUCCESS);
    }

    if args.history {
        let entries = session.history().inspect_err(log_rename_error)?;
        if args.json {
            out::print_user(&serde_json::to_string_pretty(&json!({ "entries": entries }))?);
        } else {
            out::print_history(&entries);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let transform: HistoryEntry = match (args.explicit_transform(), args.reuse) {
        (Some(t), _) => t,
        (None, Some(n)) => {
            let entries = session.history().inspect_err(log_rename_error)?;
            n.checked_sub(1)
                .and_then(|i| entries.get(i))
                .cloned()
                .ok_or_else(|| anyhow!("no history entry {n} (history has {} entries)", entries.len()))?
        }
        (None, None) => bail!("nothing to do: pass --pattern PATTERN or --reuse N"),
    };

    let files = collect_files(args.sanitized_paths());
    if files.is_empty() {
        bail!("no files to rename: pass one or more file or directory paths");
    }
    session.load_files(files);

    let previews = session
        .generate_preview(
            &transform.pattern,
            &transform.replacement,
            transform.is_regex,
            transform.case_insensitive,
        )
        .inspect_err(log_rename_error)
        .context("cannot build the rename preview")?;

    if args.json {
        out::print_user(&serde_json::to_string(&json!({ "preview": previews }))?);
    } else {
        out::print_preview(&previews);
    }

    if args.dry_run {
        return Ok(ExitCode::SUCCESS);
    }
    if !previews.iter().any(|p| p.has_changed) {
        if !args.json {
            out::print_info("Nothing to rename.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = session.execute_rename();
    if args.json {
        out::print_user(&serde_json::to_string(&json!({ "outcome": outcome }))?);
    } else {
        out::print_outcome(&outcome);
    }

    if outcome.failure_count > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

//! User-facing terminal output.
//!
//! Small wrappers around stdout/stderr printing that give consistent, colored
//! messages. Colors are enabled only when output is a TTY.

use owo_colors::OwoColorize;

use crate::engine::RenameOutcome;
use crate::history::HistoryEntry;
use crate::preview::FilePreview;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

/// Informational side note on stderr, so stdout stays clean for scripted output.
pub fn print_notice(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One line per file: `old -> new` for changes, dimmed `old (unchanged)` otherwise.
pub fn print_preview(rows: &[FilePreview]) {
    let tty = is_tty();
    for row in rows {
        match (row.has_changed, tty) {
            (true, true) => println!("  {} -> {}", row.original_name, row.new_name.green()),
            (true, false) => println!("  {} -> {}", row.original_name, row.new_name),
            (false, true) => println!("  {}", format!("{} (unchanged)", row.original_name).dimmed()),
            (false, false) => println!("  {} (unchanged)", row.original_name),
        }
    }
    let changed = rows.iter().filter(|r| r.has_changed).count();
    print_info(&format!("{changed} of {} file(s) would be renamed", rows.len()));
}

pub fn print_outcome(outcome: &RenameOutcome) {
    for err in &outcome.errors {
        print_error(err);
    }
    let summary = format!(
        "{} renamed, {} failed",
        outcome.success_count, outcome.failure_count
    );
    if outcome.failure_count == 0 {
        print_success(&summary);
    } else {
        print_warn(&summary);
    }
}

/// Numbered history listing (1 = most recent), matching `--reuse N`.
pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        print_info("history is empty");
        return;
    }
    for (i, e) in entries.iter().enumerate() {
        let mut flags = Vec::new();
        if e.is_regex {
            flags.push("regex");
        }
        if e.case_insensitive {
            flags.push("ignore-case");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        print_user(&format!("{:>3}. {:?} -> {:?}{}", i + 1, e.pattern, e.replacement, flags));
    }
}

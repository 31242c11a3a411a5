//! Tracing initialization.
//! Builds a subscriber with per-layer level filters, compact or JSON formatting, and
//! optional file logging.
//!
//! Behavior:
//! - Console logs go to stderr so stdout stays reserved for the preview and results.
//! - Console verbosity follows LogLevel; `normal` only shows warnings and errors because
//!   the user-facing output already reports each rename.
//! - The log file (if any) always records at least `info`, so every rename is on record.
//! - `RUST_LOG`, when set and valid, replaces the console filter.
//! - We refuse file logging if any ancestor of the file path is a symlink.

use anyhow::Result;
use batch_rename::output as out;
use batch_rename::platform::open_log_file_secure_append;
use batch_rename::{LogLevel, default_log_path, path_has_symlink_ancestor};
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::{Filter, SubscriberExt};
use tracing_subscriber::{Registry, registry};
use tracing_subscriber::util::SubscriberInitExt;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn console_level(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn file_level(lvl: &LogLevel) -> LevelFilter {
    console_level(lvl).max(LevelFilter::INFO)
}

/// Console filter: `RUST_LOG` if it parses, else the configured level.
fn console_filter(lvl: &LogLevel) -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::default().add_directive(console_level(lvl).into())),
        _ => EnvFilter::default().add_directive(console_level(lvl).into()),
    }
}

/// One formatting layer writing to `writer`, JSON or compact.
fn fmt_layer<W, F>(writer: W, json: bool, ansi: bool, filter: F) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    F: Filter<Registry> + Send + Sync + 'static,
{
    if json {
        tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .with_ansi(ansi)
            .compact()
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    }
}

/// Try to open a non-blocking file writer for logging:
/// - Refuse if any ancestor is a symlink (prints a warning and returns None)
/// - Open file for append (creating parents) and wrap with non_blocking
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to enable file logging: ancestor of {} is a symlink; proceeding without file logging.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Error checking log path {} for symlinks: {}; proceeding without file logging.",
                path.display(),
                e
            ));
            return None;
        }
        Ok(false) => {}
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Failed to open log file {}: {}", path.display(), e));
            None
        }
    }
}

/// Initialize tracing. Returns the file appender's WorkerGuard when file logging
/// is active; hold it until exit so buffered lines are flushed.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let ansi = atty::is(atty::Stream::Stderr);
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(std::io::stderr, json, ansi, console_filter(lvl))];
    let mut guard = None;

    if let Some(path) = log_file {
        match maybe_open_non_blocking_writer(path) {
            Some((writer, g)) => {
                layers.push(fmt_layer(writer, json, false, file_level(lvl)));
                guard = Some(g);
            }
            None => {
                if let Ok(def) = default_log_path()
                    && def != path
                {
                    out::print_notice(&format!(
                        "You can try using the default log path instead: {}",
                        def.display()
                    ));
                }
            }
        }
    }

    registry().with(layers).try_init()?;
    Ok(guard)
}

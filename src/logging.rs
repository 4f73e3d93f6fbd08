//! Diagnostic log channel
//!
//! The terminal is owned by the TUI, so log records go to a file instead of
//! stderr. Failed chat requests end up here and nowhere else.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::PlaygroundError;

const DEFAULT_FILTER: &str = "llm_playground=debug";

/// Pick the log file: explicit path first, then the debug-build fallback
pub fn resolve_log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if cfg!(debug_assertions) {
        Some(std::env::temp_dir().join("llm-playground.log"))
    } else {
        None
    }
}

/// Install the file-backed logger
///
/// Does nothing when no log path resolves. Honors `RUST_LOG`.
pub fn init(explicit: Option<&Path>) -> Result<(), PlaygroundError> {
    let Some(path) = resolve_log_path(explicit) else {
        return Ok(());
    };

    let file = open_log_file(&path)?;
    let mut builder = build_logger(file);

    if builder.try_init().is_err() {
        // A logger is already installed (tests, embedding)
        log::debug!("Logger already initialized");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, PlaygroundError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| PlaygroundError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn build_logger(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;

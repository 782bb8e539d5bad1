//! Log setup.
//!
//! The terminal is owned by the UI while the timer runs, so logs go to a file.
//! `FOCUS_TIMER_LOG` takes precedence over the configured filter.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, Paths};
use crate::error::FocusError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FOCUS_TIMER_LOG";

/// Pick the log file: CLI override, then config, then the default location.
#[must_use]
pub fn log_path(config: &LoggingConfig, cli_override: Option<&Path>, paths: &Paths) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| paths.log_file.clone())
}

/// Build the filter from the environment, falling back to the configured level.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber writing to `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig, path: &Path) -> Result<(), FocusError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            FocusError::Config(format!("Failed to open log file {}: {e}", path.display()))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| FocusError::Config(format!("Failed to initialize logging: {e}")))
}

/// Install the subscriber, or warn on stderr and carry on without one.
///
/// Returns whether logging is active.
pub fn init_or_warn(config: &LoggingConfig, path: &Path) -> bool {
    match init(config, path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{}: {e}; continuing without a log file", "warning".yellow().bold());
            false
        }
    }
}

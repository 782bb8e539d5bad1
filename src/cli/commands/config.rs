//! `focus-timer config` implementation.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocusError;

/// Resolve the config file, preferring an explicit path.
///
/// # Errors
///
/// Returns an error if no path was given and the home directory is unknown.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, FocusError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.config_file),
    }
}

/// Load the configuration from `explicit` or the default location.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, FocusError> {
    Config::load_from_path(&config_path(explicit)?)
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, parsed, or written.
pub fn config(
    cmd: &ConfigCommands,
    explicit: Option<&Path>,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let path = config_path(explicit)?;

    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&path)?;
            match format {
                OutputFormat::Json => config.to_json(),
                OutputFormat::Pretty => config.to_yaml(),
            }
        }

        ConfigCommands::Path => Ok(path.display().to_string()),

        ConfigCommands::Init { force } => init_config(&path, *force, format),
    }
}

fn init_config(path: &Path, force: bool, format: OutputFormat) -> Result<String, FocusError> {
    if path.exists() && !force {
        return Err(FocusError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save_to_path(path)?;

    match format {
        OutputFormat::Json => Ok(serde_json::json!({ "created": path }).to_string()),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote default configuration to".green(),
            path.display()
        )),
    }
}

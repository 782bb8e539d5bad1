//! Command implementations for focus-timer.

mod completions;
mod config;
mod run;

pub use completions::completions;
pub use config::{config, config_path, load_config};
pub use run::{build_view, run};

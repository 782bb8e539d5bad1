//! Configuration management for focus-timer.
//!
//! This module handles loading and saving configuration from `~/.focus-timer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AlarmConfig, ColorSetting, Config, GeneralConfig, LoggingConfig, TimerConfig};

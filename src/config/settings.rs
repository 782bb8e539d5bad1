//! Configuration settings for focus-timer.
//!
//! Settings are loaded from `~/.focus-timer/config.yaml`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FocusError;
use crate::features::focus::{AlarmSettings, DurationChoice, TimerMode};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Alarm settings.
    pub alarm: AlarmConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Mode the timer opens in.
    pub initial_mode: TimerMode,
    /// Optional custom duration (15, 25, 30, 45 or 60) loaded at startup.
    pub initial_minutes: Option<u32>,
}

/// Alarm settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlarmConfig {
    /// Produce sound at all; `false` selects the silent backend.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Start with the alarm muted.
    pub start_muted: bool,
    /// Tone pitch in hertz.
    #[serde(default = "default_frequency")]
    pub frequency_hz: f32,
    /// Tone volume, 0.0 - 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Milliseconds between terminal bells while ringing.
    #[serde(default = "default_bell_interval")]
    pub bell_interval_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `focus_timer=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to `~/.focus-timer/focus-timer.log`.
    pub file: Option<std::path::PathBuf>,
}

// Default value functions for serde
const fn default_true() -> bool {
    true
}

const fn default_frequency() -> f32 {
    440.0
}

const fn default_volume() -> f32 {
    0.5
}

const fn default_bell_interval() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            sound: default_true(),
            start_muted: false,
            frequency_hz: default_frequency(),
            volume: default_volume(),
            bell_interval_ms: default_bell_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl AlarmConfig {
    /// Tone parameters for the alarm.
    #[must_use]
    pub const fn settings(&self) -> AlarmSettings {
        AlarmSettings {
            frequency_hz: self.frequency_hz,
            volume: self.volume,
            start_muted: self.start_muted,
        }
    }

    #[must_use]
    pub const fn bell_interval(&self) -> Duration {
        Duration::from_millis(self.bell_interval_ms)
    }
}

impl TimerConfig {
    /// The configured startup duration, if it is one of the offered values.
    #[must_use]
    pub fn initial_duration(&self) -> Option<DurationChoice> {
        self.initial_minutes.and_then(DurationChoice::from_minutes)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the YAML types cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<(), FocusError> {
        if !(0.0..=1.0).contains(&self.alarm.volume) {
            return Err(FocusError::Config(format!(
                "alarm.volume must be between 0.0 and 1.0, got {}",
                self.alarm.volume
            )));
        }
        if !self.alarm.frequency_hz.is_finite() || self.alarm.frequency_hz <= 0.0 {
            return Err(FocusError::Config(format!(
                "alarm.frequency_hz must be positive, got {}",
                self.alarm.frequency_hz
            )));
        }
        if self.alarm.bell_interval_ms < 100 {
            return Err(FocusError::Config(format!(
                "alarm.bell_interval_ms must be at least 100, got {}",
                self.alarm.bell_interval_ms
            )));
        }
        if let Some(minutes) = self.timer.initial_minutes {
            if DurationChoice::from_minutes(minutes).is_none() {
                return Err(FocusError::Config(format!(
                    "timer.initial_minutes must be one of 15, 25, 30, 45, 60, got {minutes}"
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, FocusError> {
        serde_yaml::to_string(self)
            .map_err(|e| FocusError::Parse(format!("Failed to serialize config: {e}")))
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, FocusError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FocusError::Parse(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.initial_mode, TimerMode::Focus);
        assert!(config.alarm.sound);
        assert!(!config.alarm.start_muted);
        assert!((config.alarm.frequency_hz - 440.0).abs() < f32::EPSILON);
        assert_eq!(config.alarm.bell_interval(), Duration::from_secs(1));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.initial_mode = TimerMode::LongBreak;
        config.alarm.start_muted = true;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.initial_mode, TimerMode::LongBreak);
        assert!(loaded.alarm.start_muted);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  initial_mode: short_break
alarm:
  volume: 0.25
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.initial_mode, TimerMode::ShortBreak);
        assert!((config.alarm.volume - 0.25).abs() < f32::EPSILON);
        // Defaults fill the rest
        assert!(config.alarm.sound);
        assert_eq!(config.alarm.bell_interval_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "alarm:\n  volume: 3.0\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("alarm.volume"));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let mut config = Config::default();
        for bad in [f32::NAN, f32::INFINITY, 0.0] {
            config.alarm.frequency_hz = bad;
            assert!(config.validate().is_err(), "{bad} accepted");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "alarm:\n  frequency_hz: .nan\n").unwrap();
        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("alarm.frequency_hz"));
    }

    #[test]
    fn test_initial_minutes_must_be_offered() {
        let mut config = Config::default();
        config.timer.initial_minutes = Some(20);
        assert!(config.validate().is_err());

        config.timer.initial_minutes = Some(45);
        assert!(config.validate().is_ok());
        assert_eq!(config.timer.initial_duration(), Some(DurationChoice::FortyFive));
    }

    #[test]
    fn test_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(FocusError::Config(_))
        ));
    }

    #[test]
    fn test_json_output() {
        let json = Config::default().to_json().unwrap();
        assert!(json.contains("\"initial_mode\": \"focus\""));
    }
}

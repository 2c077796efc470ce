//! Configuration settings for tomo.
//!
//! Settings are loaded from `~/.tomo/config.yaml`. The work and rest
//! durations come from the selection menu or CLI flags; the config file
//! carries the values the menu never asks about.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TomoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// Transition alert settings.
    pub alerts: AlertConfig,
}

/// Timer settings not covered by the selection menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Long break duration in minutes, taken after the final work period.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of work/short-break cycles before the long break.
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

/// Transition alert settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Send desktop notifications on phase transitions.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Play a notification sound.
    #[serde(default = "default_true")]
    pub sound: bool,
}

// Default value functions for serde
const fn default_long_break() -> u32 {
    15
}

const fn default_cycles() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            long_break_minutes: default_long_break(),
            cycles: default_cycles(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            notifications: default_true(),
            sound: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TomoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

//! Game settings and preferences
//!
//! Stored as JSON. Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE_HZ;

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value outside its allowed range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Power-up chime volume relative to other effects (0.0 - 1.0)
    pub power_up_volume: f32,
    pub muted: bool,

    // === Demo ===
    /// Ticks the headless autopilot may run before giving up
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            master_volume: 0.8,
            sfx_volume: 1.0,
            power_up_volume: 0.5,
            muted: false,
            max_ticks: 60 * 60 * 10,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=1000).contains(&self.tick_rate_hz) {
            return Err(SettingsError::OutOfRange {
                field: "tick_rate_hz",
                value: self.tick_rate_hz as f64,
            });
        }
        for (field, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("power_up_volume", self.power_up_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::OutOfRange {
                    field,
                    value: value as f64,
                });
            }
        }
        Ok(())
    }
}

//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub screen_width: f64,
    pub screen_height: f64,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u32,

    // === Ship ===
    pub accel_scale: f64,
    pub bullet_scale: f64,
    pub bullet_lifetime: i32,
    pub fire_cooldown: u64,

    // === World ===
    pub anim_frame_ticks: u64,
    pub initial_asteroids: usize,
    pub safe_spawn_distance: f64,
    /// RNG seed for asteroid placement and shapes
    pub seed: u64,

    // === Audio ===
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,

            accel_scale: ACCEL_SCALE,
            bullet_scale: BULLET_SCALE,
            bullet_lifetime: BULLET_LIFETIME,
            fire_cooldown: FIRE_COOLDOWN,

            anim_frame_ticks: ANIM_FRAME_TICKS,
            initial_asteroids: INITIAL_ASTEROIDS,
            safe_spawn_distance: SAFE_SPAWN_DISTANCE,
            seed: 0x5eed,

            music_volume: 0.7,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with values the simulation cannot run on pulled back into range
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };

        Self {
            screen_width: positive(self.screen_width, defaults.screen_width),
            screen_height: positive(self.screen_height, defaults.screen_height),
            tick_interval_ms: self.tick_interval_ms.max(1),
            accel_scale: if self.accel_scale.is_finite() {
                self.accel_scale
            } else {
                defaults.accel_scale
            },
            bullet_scale: if self.bullet_scale.is_finite() {
                self.bullet_scale
            } else {
                defaults.bullet_scale
            },
            bullet_lifetime: self.bullet_lifetime.max(1),
            fire_cooldown: self.fire_cooldown.max(1),
            anim_frame_ticks: self.anim_frame_ticks.max(1),
            safe_spawn_distance: if self.safe_spawn_distance.is_finite() {
                self.safe_spawn_distance.max(0.0)
            } else {
                defaults.safe_spawn_distance
            },
            music_volume: self.music_volume.clamp(0.0, 1.0),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "bullet_lifetime": 40, "seed": 9 }"#).unwrap();
        assert_eq!(settings.bullet_lifetime, 40);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.fire_cooldown, FIRE_COOLDOWN);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/definitely/not/here/wrapstar.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert_eq!(
            Settings::load_or_default("/definitely/not/here/wrapstar.json"),
            Settings::default()
        );
    }

    #[test]
    fn test_sanitized_clamps() {
        let settings = Settings {
            screen_width: -5.0,
            screen_height: f64::NAN,
            bullet_lifetime: 0,
            fire_cooldown: 0,
            anim_frame_ticks: 0,
            music_volume: 3.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.screen_height, SCREEN_HEIGHT);
        assert_eq!(settings.bullet_lifetime, 1);
        assert_eq!(settings.fire_cooldown, 1);
        assert_eq!(settings.anim_frame_ticks, 1);
        assert_eq!(settings.music_volume, 1.0);
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let settings = Settings {
            accel_scale: 0.1,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}

//! Player-facing settings
//!
//! Handed over by the host page as JSON (never persisted). Settings pick a
//! difficulty preset and which controls are live; `tuning()` turns them into
//! the balance numbers the simulation runs on.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Time between spawns (ms)
    pub fn spawn_interval_ms(&self) -> f32 {
        match self {
            Difficulty::Easy => 1000.0,
            Difficulty::Normal => 900.0,
            Difficulty::Hard => 800.0,
        }
    }

    /// Chance a spawn is a bomb
    pub fn bomb_probability(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Normal => 0.3,
            Difficulty::Hard => 0.4,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Controls ===
    /// Steer with device tilt
    pub tilt_controls: bool,
    /// Basket follows the mouse/touch position
    pub pointer_controls: bool,

    // === Rules ===
    /// A caught bomb ends the run immediately
    pub bomb_ends_game: bool,

    /// Balance overrides applied on top of the preset
    pub tuning: Option<Tuning>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            tilt_controls: true,
            pointer_controls: true,
            bomb_ends_game: false,
            tuning: None,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Parse settings handed over by the page
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on bad input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({})", settings.difficulty.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Balance numbers for these settings
    pub fn tuning(&self) -> Tuning {
        let mut tuning = self.tuning.clone().unwrap_or_else(|| Tuning {
            spawn_interval_ms: self.difficulty.spawn_interval_ms(),
            bomb_probability: self.difficulty.bomb_probability(),
            ..Tuning::default()
        });
        tuning.bomb_ends_game |= self.bomb_ends_game;
        tuning.sanitized()
    }
}

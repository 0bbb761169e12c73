//! Playfield and physics settings
//!
//! Loaded from a JSON file by the headless runner; embedders can build one
//! directly or start from `Settings::default()`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading the settings file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not valid settings JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed, but the values make no sense for a playfield.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield size; origin is the bottom-left corner, y points up
    pub playfield: Vec2,
    /// Distance from the top edge down to the sky boundary
    pub ceiling_inset: f32,

    // === Player ===
    /// Player sprite size; the body is a circle of radius `height / 2`
    pub player_size: Vec2,
    /// Player body mass (impulse / mass = velocity change)
    pub player_mass: f32,

    // === Obstacles ===
    /// Size of a single obstacle (upper and lower are the same)
    pub obstacle_size: Vec2,

    // === Physics ===
    /// Vertical gravity acceleration (negative pulls down)
    pub gravity: f32,

    // === Backdrop ===
    /// Width of one backdrop tile
    pub backdrop_tile_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(750.0, 1334.0),
            ceiling_inset: 44.0,

            player_size: Vec2::new(80.0, 60.0),
            player_mass: 0.1,

            obstacle_size: Vec2::new(104.0, 800.0),

            gravity: -980.0,

            backdrop_tile_width: 1200.0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be positive, got {v}")))
            }
        };

        positive("playfield.x", self.playfield.x)?;
        positive("playfield.y", self.playfield.y)?;
        positive("player_size.x", self.player_size.x)?;
        positive("player_size.y", self.player_size.y)?;
        positive("player_mass", self.player_mass)?;
        positive("obstacle_size.x", self.obstacle_size.x)?;
        positive("obstacle_size.y", self.obstacle_size.y)?;
        positive("backdrop_tile_width", self.backdrop_tile_width)?;

        if !self.gravity.is_finite() {
            return Err(SettingsError::Invalid("gravity must be finite".into()));
        }
        if !(0.0..self.playfield.y).contains(&self.ceiling_inset) {
            return Err(SettingsError::Invalid(format!(
                "ceiling_inset {} outside playfield height {}",
                self.ceiling_inset, self.playfield.y
            )));
        }
        Ok(())
    }

    /// Center of the playfield
    #[inline]
    pub fn mid(&self) -> Vec2 {
        self.playfield * 0.5
    }

    /// Gap height between an obstacle pair
    #[inline]
    pub fn gap_height(&self) -> f32 {
        self.player_size.y * crate::consts::GAP_HEIGHT_MULTIPLIER
    }

    /// Player body radius
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_size.y / 2.0
    }

    /// Seconds an obstacle takes to cross and leave the playfield
    #[inline]
    pub fn traversal_duration(&self) -> f32 {
        self.playfield.x / crate::consts::TRAVERSAL_SPEED_DIVISOR
    }
}

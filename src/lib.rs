//! Gap Flyer - a side-scrolling gap-flying game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world, spawning, contacts, game state)
//! - `settings`: Playfield and physics configuration

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Simulation ticks per second
    pub const SIM_HZ: u32 = 120;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 3.0;
    /// `SPAWN_INTERVAL` in whole simulation ticks
    pub const SPAWN_INTERVAL_TICKS: u64 = (SPAWN_INTERVAL * SIM_HZ as f32) as u64;
    /// Gap height as a multiple of the player's height
    pub const GAP_HEIGHT_MULTIPLIER: f32 = 4.0;
    /// Traversal duration is `playfield width / TRAVERSAL_SPEED_DIVISOR` seconds
    pub const TRAVERSAL_SPEED_DIVISOR: f32 = 100.0;
    /// Obstacles travel `TRAVERSAL_DISTANCE_FACTOR * playfield width` leftward
    pub const TRAVERSAL_DISTANCE_FACTOR: f32 = 2.0;
    /// Upward impulse applied on every flap
    pub const FLAP_IMPULSE: Vec2 = Vec2::new(0.0, 50.0);

    /// Number of side-by-side backdrop tiles
    pub const BACKDROP_TILES: u32 = 3;
    /// Seconds for a backdrop tile to scroll one tile width
    pub const BACKDROP_SCROLL_DURATION: f32 = 10.0;

    /// Height of the ground and sky boundary strips
    pub const BOUNDARY_THICKNESS: f32 = 1.0;

    /// Shown while the game is over
    pub const GAME_OVER_MESSAGE: &str = "Game Over. Tap to play again";
}

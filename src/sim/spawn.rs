//! Obstacle spawning
//!
//! Each spawn places an upper and lower obstacle around a gap, plus a gap
//! sensor filling the gap, just off the right edge of the playfield. All three
//! share one scripted motion: slide left two playfield widths, then despawn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::geom::Shape;
use super::motion::ScriptedMotion;
use super::world::{Body, EntityId, EntityKind, World};
use crate::Settings;
use crate::consts::TRAVERSAL_DISTANCE_FACTOR;

/// Draw the vertical offset of the next gap.
///
/// Uniform over whole units in `[0, height/2)`, shifted down by `height/4`,
/// so the result lies in `[-height/4, height/4)`. A playfield too short for a
/// non-empty range always yields `-height/4`.
pub fn draw_offset<R: Rng + ?Sized>(rng: &mut R, playfield_height: f32) -> f32 {
    let range = (playfield_height / 2.0).max(0.0) as u32;
    let amount = if range > 0 { rng.random_range(0..range) } else { 0 };
    amount as f32 - playfield_height / 4.0
}

/// Positions of one obstacle pair and its gap sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairLayout {
    pub upper: Vec2,
    pub lower: Vec2,
    pub gap: Vec2,
    pub obstacle_size: Vec2,
    pub gap_size: Vec2,
}

impl PairLayout {
    /// Lay out a pair for the given vertical offset
    pub fn new(settings: &Settings, offset: f32) -> Self {
        let mid = settings.mid();
        let gap_height = settings.gap_height();
        let obstacle_size = settings.obstacle_size;
        let x = mid.x + settings.playfield.x;
        let half_span = obstacle_size.y / 2.0 + gap_height / 2.0;

        Self {
            upper: Vec2::new(x, mid.y + half_span + offset),
            lower: Vec2::new(x, mid.y - half_span + offset),
            gap: Vec2::new(x, mid.y + offset),
            obstacle_size,
            gap_size: Vec2::new(obstacle_size.x, gap_height),
        }
    }

    /// Bottom edge of the upper obstacle
    pub fn upper_edge(&self) -> f32 {
        self.upper.y - self.obstacle_size.y / 2.0
    }

    /// Top edge of the lower obstacle
    pub fn lower_edge(&self) -> f32 {
        self.lower.y + self.obstacle_size.y / 2.0
    }
}

/// Record of one spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnedPair {
    pub upper: EntityId,
    pub lower: EntityId,
    pub gap: EntityId,
    pub offset: f32,
}

/// The motion every spawned entity runs
pub fn traversal_motion(settings: &Settings) -> ScriptedMotion {
    ScriptedMotion::move_then_despawn(
        Vec2::new(-TRAVERSAL_DISTANCE_FACTOR * settings.playfield.x, 0.0),
        settings.traversal_duration(),
    )
}

/// Insert an obstacle pair and gap sensor at a fixed offset
pub fn spawn_pair_at(world: &mut World, settings: &Settings, offset: f32) -> SpawnedPair {
    let layout = PairLayout::new(settings, offset);
    let motion = traversal_motion(settings);
    let solid = || Some(Body::fixed(Shape::rect(layout.obstacle_size), Category::Solid));

    let upper = world.spawn(EntityKind::UpperObstacle, layout.upper, solid(), Some(motion));
    let lower = world.spawn(EntityKind::LowerObstacle, layout.lower, solid(), Some(motion));
    let gap = world.spawn(
        EntityKind::GapSensor,
        layout.gap,
        Some(Body::fixed(Shape::rect(layout.gap_size), Category::Gap)),
        Some(motion),
    );

    log::debug!(
        "Spawned pair (upper {}, lower {}, gap {}) offset {:.1}",
        upper,
        lower,
        gap,
        offset
    );
    SpawnedPair {
        upper,
        lower,
        gap,
        offset,
    }
}

/// Draw an offset and spawn one obstacle pair
pub fn spawn_pair<R: Rng + ?Sized>(world: &mut World, settings: &Settings, rng: &mut R) -> SpawnedPair {
    let offset = draw_offset(rng, settings.playfield.y);
    spawn_pair_at(world, settings, offset)
}

//! Scripted (non-physics) motion
//!
//! A motion translates an entity by a fixed delta over a fixed duration. A
//! one-shot motion marks its entity for despawn when it completes; a looping
//! motion snaps back to its start and repeats forever.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What happens when a motion runs out of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionEnd {
    /// Remove the entity from the world
    Despawn,
    /// Jump back by `-delta` and start over
    Repeat,
}

/// Constant-velocity translation over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedMotion {
    /// Total translation per run
    pub delta: Vec2,
    /// Seconds per run
    pub duration: f32,
    /// Seconds elapsed in the current run
    pub elapsed: f32,
    pub end: MotionEnd,
}

impl ScriptedMotion {
    /// Move by `delta` over `duration`, then despawn
    pub fn move_then_despawn(delta: Vec2, duration: f32) -> Self {
        Self {
            delta,
            duration,
            elapsed: 0.0,
            end: MotionEnd::Despawn,
        }
    }

    /// Move by `delta` over `duration`, snap back, repeat
    pub fn looping(delta: Vec2, duration: f32) -> Self {
        Self {
            delta,
            duration,
            elapsed: 0.0,
            end: MotionEnd::Repeat,
        }
    }

    /// One-shot motion that has run its full duration
    pub fn is_complete(&self) -> bool {
        self.end == MotionEnd::Despawn && self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and return the displacement to apply
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        if dt <= 0.0 || self.is_complete() {
            return Vec2::ZERO;
        }
        if self.duration <= 0.0 {
            // Zero-length motion jumps straight to its end state
            self.elapsed = self.duration.max(0.0);
            return match self.end {
                MotionEnd::Despawn => self.delta,
                MotionEnd::Repeat => Vec2::ZERO,
            };
        }

        let velocity = self.delta / self.duration;
        match self.end {
            MotionEnd::Despawn => {
                let remaining = self.duration - self.elapsed;
                if dt >= remaining {
                    self.elapsed = self.duration;
                    velocity * remaining
                } else {
                    self.elapsed += dt;
                    velocity * dt
                }
            }
            MotionEnd::Repeat => {
                let total = self.elapsed + dt;
                let wraps = (total / self.duration).floor();
                self.elapsed = total - wraps * self.duration;
                // Net movement: forward for dt, back by delta per completed run
                velocity * dt - self.delta * wraps
            }
        }
    }
}

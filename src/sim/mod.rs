//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod category;
pub mod contact;
pub mod geom;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;
pub mod world;

pub use category::{Category, Interaction, interaction};
pub use contact::{Contact, ContactBody, ContactOutcome, classify};
pub use geom::{Shape, shapes_overlap};
pub use motion::{MotionEnd, ScriptedMotion};
pub use spawn::{PairLayout, SpawnedPair, draw_offset, spawn_pair, spawn_pair_at};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use timer::SpawnTimer;
pub use world::{Body, Entity, EntityId, EntityKind, World};

//! Entity arena and minimal physics world
//!
//! The world owns every live entity. Each `step`:
//! 1. scales `dt` by the world speed (0 freezes everything)
//! 2. integrates gravity and velocity for dynamic bodies
//! 3. advances scripted motion
//! 4. reports contact-begin events for newly overlapping notifying pairs
//! 5. sweeps entities whose one-shot motion has completed
//!
//! No pair that notifies also collides (see `category::interaction`), so the
//! world never needs to push bodies apart.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::category::{Category, interaction};
use super::contact::{Contact, ContactBody};
use super::geom::{Shape, shapes_overlap};
use super::motion::ScriptedMotion;

/// Stable entity identifier. Never reused within a world.
pub type EntityId = u32;

/// What an entity is, independent of its physics category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    UpperObstacle,
    LowerObstacle,
    GapSensor,
    Ground,
    Sky,
    Backdrop,
}

/// Physics body attached to an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub shape: Shape,
    pub category: Category,
    /// Dynamic bodies fall under gravity and respond to impulses
    pub dynamic: bool,
    pub vel: Vec2,
    pub mass: f32,
}

impl Body {
    /// Non-dynamic body of the given shape and category
    pub fn fixed(shape: Shape, category: Category) -> Self {
        Self {
            shape,
            category,
            dynamic: false,
            vel: Vec2::ZERO,
            mass: 1.0,
        }
    }
}

/// A live entity in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Center position
    pub pos: Vec2,
    pub body: Option<Body>,
    pub motion: Option<ScriptedMotion>,
}

/// Entity arena plus gravity/contact bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Live entities (sorted by id for determinism)
    entities: Vec<Entity>,
    /// Gravity acceleration applied to dynamic bodies
    gravity: Vec2,
    /// Time scale; 0 freezes motion and physics
    speed: f32,
    /// Pairs currently overlapping (lower id first)
    touching: BTreeSet<(EntityId, EntityId)>,
    /// Next entity ID
    next_id: EntityId,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            entities: Vec::new(),
            gravity,
            speed: 1.0,
            touching: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Insert an entity and return its id
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        pos: Vec2,
        body: Option<Body>,
        motion: Option<ScriptedMotion>,
    ) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        // Ids only grow, so pushing keeps the arena sorted
        self.entities.push(Entity {
            id,
            kind,
            pos,
            body,
            motion,
        });
        id
    }

    /// Remove every entity. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.touching.clear();
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let idx = self.entities.binary_search_by_key(&id, |e| e.id).ok()?;
        Some(&self.entities[idx])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let idx = self.entities.binary_search_by_key(&id, |e| e.id).ok()?;
        Some(&mut self.entities[idx])
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Switch a body between dynamic and frozen
    pub fn set_dynamic(&mut self, id: EntityId, dynamic: bool) {
        if let Some(body) = self.get_mut(id).and_then(|e| e.body.as_mut()) {
            body.dynamic = dynamic;
        }
    }

    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.get_mut(id).and_then(|e| e.body.as_mut()) {
            body.vel = vel;
        }
    }

    /// Apply an instantaneous impulse. Frozen bodies ignore impulses.
    pub fn apply_impulse(&mut self, id: EntityId, impulse: Vec2) {
        if let Some(body) = self.get_mut(id).and_then(|e| e.body.as_mut()) {
            if body.dynamic && body.mass > 0.0 {
                body.vel += impulse / body.mass;
            }
        }
    }

    /// Advance the world by `dt` seconds (before speed scaling) and return
    /// the contacts that began during this step.
    pub fn step(&mut self, dt: f32) -> Vec<Contact> {
        let dt = dt * self.speed;
        if dt <= 0.0 {
            return Vec::new();
        }

        let gravity = self.gravity;
        for entity in &mut self.entities {
            if let Some(body) = entity.body.as_mut() {
                if body.dynamic {
                    body.vel += gravity * dt;
                    entity.pos += body.vel * dt;
                }
            }
            if let Some(motion) = entity.motion.as_mut() {
                entity.pos += motion.advance(dt);
            }
        }

        let contacts = self.detect_contacts();
        self.sweep();
        contacts
    }

    /// Report newly overlapping notifying pairs; forget pairs that separated
    fn detect_contacts(&mut self) -> Vec<Contact> {
        let mut contacts = Vec::new();

        for (i, a) in self.entities.iter().enumerate() {
            let Some(body_a) = &a.body else { continue };
            for b in &self.entities[i + 1..] {
                let Some(body_b) = &b.body else { continue };
                if !interaction(body_a.category, body_b.category).notifies {
                    continue;
                }

                let key = (a.id, b.id);
                if shapes_overlap(&body_a.shape, a.pos, &body_b.shape, b.pos) {
                    if self.touching.insert(key) {
                        let contact = Contact {
                            a: ContactBody {
                                id: a.id,
                                category: body_a.category,
                            },
                            b: ContactBody {
                                id: b.id,
                                category: body_b.category,
                            },
                        };
                        log::trace!("Contact began: {:?}", contact);
                        contacts.push(contact);
                    }
                } else {
                    self.touching.remove(&key);
                }
            }
        }

        contacts
    }

    /// Remove entities whose one-shot scripted motion has finished
    fn sweep(&mut self) {
        let before = self.entities.len();
        self.entities
            .retain(|e| !e.motion.as_ref().is_some_and(|m| m.is_complete()));

        if self.entities.len() != before {
            log::debug!("Swept {} finished entities", before - self.entities.len());
            let live: BTreeSet<EntityId> = self.entities.iter().map(|e| e.id).collect();
            self.touching
                .retain(|(a, b)| live.contains(a) && live.contains(b));
        }
    }
}

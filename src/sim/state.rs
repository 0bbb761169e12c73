//! Game session state and the Playing/GameOver state machine
//!
//! `GameState` owns everything a run needs: the world, the player id, the
//! spawn timer, the RNG and the score. All mutation happens from `tick` on a
//! single thread, so input, timer fires and contacts never interleave.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::contact::{Contact, ContactOutcome, classify};
use super::geom::Shape;
use super::motion::ScriptedMotion;
use super::spawn::{SpawnedPair, spawn_pair};
use super::timer::{SpawnTimer, rearm};
use super::world::{Body, Entity, EntityId, EntityKind, World};
use crate::Settings;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (the player may still be frozen before its first flap)
    Playing,
    /// Run ended; world frozen until the next tap
    GameOver,
}

/// Something that happened during a tick, for HUD/sound layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player flapped
    Flapped,
    /// A new obstacle pair entered the world
    Spawned(SpawnedPair),
    /// Player passed a gap
    Scored { score: u64 },
    /// Player hit something solid
    GameOver { score: u64 },
    /// A new run started after game over
    Reset,
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    rng: Pcg32,
    phase: GamePhase,
    score: u64,
    /// Text shown by the score label
    score_text: String,
    /// Terminal message, only while game over
    message: Option<String>,
    world: World,
    player: EntityId,
    spawn_timer: Option<SpawnTimer>,
    /// Ticks since the session started (not affected by world speed)
    time_ticks: u64,
}

impl GameState {
    /// Create a new session and set up the first run
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            score_text: String::new(),
            message: None,
            world: World::new(Vec2::new(0.0, settings.gravity)),
            player: 0,
            spawn_timer: None,
            time_ticks: 0,
            settings,
        };
        state.setup_game();
        state
    }

    /// Build a fresh run: player, backdrop, boundaries, score label, timer
    fn setup_game(&mut self) {
        let settings = &self.settings;
        let mid = settings.mid();

        // Backdrop tiles scroll one tile width every 10s, forever
        let tile = settings.backdrop_tile_width;
        for i in 0..BACKDROP_TILES {
            self.world.spawn(
                EntityKind::Backdrop,
                Vec2::new(tile * i as f32 + tile / 2.0, mid.y),
                None,
                Some(ScriptedMotion::looping(
                    Vec2::new(-tile, 0.0),
                    BACKDROP_SCROLL_DURATION,
                )),
            );
        }

        let player_body = Body {
            shape: Shape::circle(settings.player_radius()),
            category: Category::Player,
            dynamic: false,
            vel: Vec2::ZERO,
            mass: settings.player_mass,
        };
        self.player = self
            .world
            .spawn(EntityKind::Player, mid, Some(player_body), None);

        let strip = Shape::rect(Vec2::new(settings.playfield.x, BOUNDARY_THICKNESS));
        self.world.spawn(
            EntityKind::Ground,
            Vec2::new(mid.x, 0.0),
            Some(Body::fixed(strip, Category::Solid)),
            None,
        );
        self.world.spawn(
            EntityKind::Sky,
            Vec2::new(mid.x, settings.playfield.y - settings.ceiling_inset),
            Some(Body::fixed(strip, Category::Solid)),
            None,
        );

        self.score_text = self.score.to_string();
        self.message = None;
        rearm(&mut self.spawn_timer, self.time_ticks, SPAWN_INTERVAL_TICKS);

        log::info!("Game set up (player {}, clock {:.2}s)", self.player, self.clock());
    }

    /// Start over after a game over
    fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.world.set_speed(1.0);
        self.world.clear();
        self.setup_game();
        log::info!("Game reset");
    }

    /// Wake the player and give it an upward kick
    fn flap(&mut self) {
        self.world.set_dynamic(self.player, true);
        self.world.set_velocity(self.player, Vec2::ZERO);
        self.world.apply_impulse(self.player, FLAP_IMPULSE);
    }

    /// The primary action: flap while playing, restart after game over
    pub fn handle_tap(&mut self) -> GameEvent {
        match self.phase {
            GamePhase::Playing => {
                self.flap();
                GameEvent::Flapped
            }
            GamePhase::GameOver => {
                self.reset();
                GameEvent::Reset
            }
        }
    }

    /// Apply one contact-begin event. Ignored once the game is over.
    pub fn handle_contact(&mut self, contact: &Contact) -> Option<GameEvent> {
        if self.phase == GamePhase::GameOver {
            log::trace!("Ignoring contact after game over: {:?}", contact);
            return None;
        }

        let (a, b) = contact.categories();
        match classify(a, b) {
            ContactOutcome::ScoreGap => {
                self.score += 1;
                self.score_text = self.score.to_string();
                log::info!("Score: {}", self.score);
                Some(GameEvent::Scored { score: self.score })
            }
            ContactOutcome::GameOver => {
                self.game_over();
                Some(GameEvent::GameOver { score: self.score })
            }
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.world.set_speed(0.0);
        if let Some(timer) = self.spawn_timer.as_mut() {
            timer.cancel();
        }
        self.message = Some(GAME_OVER_MESSAGE.to_string());
        log::info!("Game over with score {}", self.score);
    }

    /// Advance the session clock one tick and spawn one pair per elapsed
    /// timer period
    pub(crate) fn advance_clock(&mut self) -> Vec<SpawnedPair> {
        self.time_ticks += 1;

        let fires = match self.spawn_timer.as_mut() {
            Some(timer) => timer.poll(self.time_ticks),
            None => 0,
        };
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        (0..fires)
            .map(|_| spawn_pair(&mut self.world, &self.settings, &mut self.rng))
            .collect()
    }

    /// Step the world and apply the contacts it reports, in order
    pub(crate) fn step_world(&mut self, dt: f32) -> Vec<GameEvent> {
        let contacts = self.world.step(dt);
        contacts
            .iter()
            .filter_map(|contact| self.handle_contact(contact))
            .collect()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Terminal message; `Some` only while game over
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for embedders placing extra bodies
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.world.get(self.player)
    }

    /// Whether the player body is currently falling under gravity
    pub fn player_is_dynamic(&self) -> bool {
        self.player()
            .and_then(|p| p.body.as_ref())
            .is_some_and(|b| b.dynamic)
    }

    pub fn spawn_timer(&self) -> Option<&SpawnTimer> {
        self.spawn_timer.as_ref()
    }

    pub fn spawn_timer_active(&self) -> bool {
        self.spawn_timer.as_ref().is_some_and(|t| t.is_active())
    }

    /// Simulation ticks since the session started
    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Seconds since the session started
    pub fn clock(&self) -> f64 {
        self.time_ticks as f64 / SIM_HZ as f64
    }
}

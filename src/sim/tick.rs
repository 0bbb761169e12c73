//! Per-frame simulation tick
//!
//! One call advances the session clock by one tick and processes, in order:
//! the tap, spawn timer fires, the world step and every contact that step
//! reported.

use super::state::{GameEvent, GamePhase, GameState};
use super::world::EntityKind;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action (tap/click/space)
    pub tap: bool,
    /// Demo mode - autopilot flies the player and restarts after game over
    pub autopilot: bool,
}

/// Advance the session by one tick of `dt` seconds and return what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let tap = input.tap || (input.autopilot && autopilot_wants_tap(state));
    if tap {
        events.push(state.handle_tap());
    }

    events.extend(state.advance_clock().into_iter().map(GameEvent::Spawned));
    events.extend(state.step_world(dt));

    events
}

/// Decide whether the autopilot should tap this tick.
///
/// Restarts immediately after a game over. While playing it aims for the
/// center of the nearest gap sensor not yet behind the player (the playfield
/// center if there is none) and flaps when it sinks a quarter gap below it.
fn autopilot_wants_tap(state: &GameState) -> bool {
    if state.phase() == GamePhase::GameOver {
        return true;
    }
    let Some(player) = state.player() else {
        return false;
    };
    let Some(body) = player.body.as_ref() else {
        return false;
    };
    if !body.dynamic {
        return true;
    }

    let radius = body.shape.half_extents().x;
    let target = state
        .world()
        .entities()
        .filter(|e| e.kind == EntityKind::GapSensor)
        .filter_map(|e| {
            let half = e.body.as_ref()?.shape.half_extents();
            (e.pos.x + half.x >= player.pos.x - radius).then_some((e.pos, half))
        })
        .min_by(|(a, _), (b, _)| a.x.total_cmp(&b.x));

    let (target_y, tolerance) = match target {
        Some((pos, half)) => (pos.y, half.y / 2.0),
        None => (state.settings.mid().y, state.settings.gap_height() / 4.0),
    };

    body.vel.y <= 0.0 && player.pos.y < target_y - tolerance
}

//! Fixed-rate simulation tick
//!
//! Advances the game state by one frame, deterministically for a given
//! seed, input sequence and clock sequence.

use super::collision;
use super::entity::update_all;
use super::player::FlightInput;
use super::state::{EndReason, GameEvent, GameState, SessionPhase};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Quit signal from the window/input layer
    pub quit: bool,
    /// Fire key pressed this tick
    pub fire: bool,
    /// Jump key pressed this tick
    pub jump: bool,
    /// Held keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    fn flight(&self) -> FlightInput {
        FlightInput {
            up: self.up,
            down: self.down,
        }
    }
}

/// Advance the game state to session clock `now` (ms).
///
/// Order: quit check, spawns, discrete input, held input, score, movement,
/// collisions. Returns what happened this tick. Does nothing once ended.
pub fn tick(state: &mut GameState, input: &TickInput, now: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !state.is_running() {
        return events;
    }

    if input.quit {
        state.phase = SessionPhase::Ended(EndReason::Quit);
        events.push(GameEvent::Ended(EndReason::Quit));
        return events;
    }

    state.now_ms = now;
    state.time_ticks += 1;

    // Timers first so this tick's spawns move and collide with everything else
    let spawns = state.spawner.advance(now);
    for _ in &spawns.enemies {
        events.push(GameEvent::EnemySpawned);
    }
    for p in &spawns.powerups {
        events.push(GameEvent::PowerUpSpawned(p.kind));
    }
    state.enemies.extend(spawns.enemies);
    state.powerups.extend(spawns.powerups);

    if input.fire && state.player.can_fire() {
        state.projectiles.push(state.player.shoot());
        events.push(GameEvent::Shot);
    }

    if input.left {
        state.player.move_left();
    }
    if input.right {
        state.player.move_right();
    }
    if input.jump && state.player.jump() {
        events.push(GameEvent::Jumped);
    }

    state.score = state.score_at(now);

    state.player.update(now, input.flight());
    update_all(&mut state.obstacles);
    update_all(&mut state.enemies);
    update_all(&mut state.powerups);
    update_all(&mut state.projectiles);

    collision::resolve(state, &mut events);

    events
}

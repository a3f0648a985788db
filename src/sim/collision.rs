//! Collision detection and response between the player and each entity group
//!
//! Runs once per tick after everything has moved, in a fixed order:
//! obstacles, enemies, projectiles vs enemies, power-ups, goal.

use super::entity::{Entity, collide_all, colliding_with, remove_dead};
use super::player::Player;
use super::state::{
    EndReason, Enemy, GameEvent, GameState, Goal, Obstacle, PowerUp, PowerUpKind, Projectile,
    SessionPhase,
};

/// Outcome of the player touching enemies this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// No enemy touched the player
    None,
    /// Shield took the hit and is now off
    ShieldAbsorbed,
    /// One life lost, some remain
    LifeLost { lives: u32 },
    /// Last life lost
    Killed,
}

/// Push the player out of any obstacle it overlaps.
///
/// The push direction comes from comparing left edges before the push. A player
/// exactly aligned with the obstacle is pushed left. Obstacles are handled in
/// order against the already-corrected position. Returns true if any obstacle
/// was touched, in which case vertical velocity is zeroed.
pub fn resolve_obstacles(player: &mut Player, obstacles: &[Obstacle]) -> bool {
    let mut touched = false;
    for obstacle in obstacles {
        let block = obstacle.rect();
        if !player.rect.overlaps(&block) {
            continue;
        }
        touched = true;
        if player.rect.x() <= block.x() {
            player.rect.set_right(block.left());
        } else {
            player.rect.set_left(block.right());
        }
    }
    if touched {
        player.velocity_y = 0;
    }
    touched
}

/// Destroy every enemy touching the player and charge the player once.
///
/// Several enemies in the same tick still cost a single shield or life.
pub fn resolve_enemies(player: &mut Player, enemies: &mut [Enemy]) -> EnemyContact {
    let hits = colliding_with(&player.rect, enemies);
    if hits.is_empty() {
        return EnemyContact::None;
    }
    for i in hits {
        enemies[i].kill();
    }

    if player.is_shielded() {
        player.shield.deactivate();
        EnemyContact::ShieldAbsorbed
    } else if player.lose_life() {
        EnemyContact::Killed
    } else {
        EnemyContact::LifeLost {
            lives: player.lives,
        }
    }
}

/// Destroy every overlapping projectile/enemy pair. Returns enemies destroyed.
pub fn resolve_projectiles(projectiles: &mut [Projectile], enemies: &mut [Enemy]) -> u32 {
    // Pairs are gathered before killing so one projectile can take out every enemy it overlaps
    let pairs = collide_all(projectiles, enemies);
    let mut destroyed = 0;
    for (p, e) in pairs {
        projectiles[p].kill();
        if enemies[e].is_alive() {
            enemies[e].kill();
            destroyed += 1;
        }
    }
    destroyed
}

/// Collect every power-up the player touches and apply it
pub fn collect_powerups(player: &mut Player, powerups: &mut [PowerUp], now: u64) -> Vec<PowerUpKind> {
    let hits = colliding_with(&player.rect, powerups);
    let mut collected = Vec::with_capacity(hits.len());
    for i in hits {
        powerups[i].kill();
        let kind = powerups[i].kind;
        player.activate_powerup(kind, now);
        collected.push(kind);
    }
    collected
}

pub fn touches_goal(player: &Player, goal: Option<&Goal>) -> bool {
    goal.is_some_and(|g| player.rect.overlaps(&g.rect()))
}

/// Run every resolver step against the current state.
///
/// Stops early once the session ends so an ended session never changes again.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    resolve_obstacles(&mut state.player, &state.obstacles);

    match resolve_enemies(&mut state.player, &mut state.enemies) {
        EnemyContact::None => {}
        EnemyContact::ShieldAbsorbed => {
            log::debug!("Shield absorbed an enemy hit");
            events.push(GameEvent::ShieldAbsorbed);
        }
        EnemyContact::LifeLost { lives } => {
            log::debug!("Enemy hit, {} lives left", lives);
            events.push(GameEvent::LifeLost { lives });
        }
        EnemyContact::Killed => {
            events.push(GameEvent::LifeLost { lives: 0 });
            end(state, EndReason::Died, events);
            return;
        }
    }

    let shot = resolve_projectiles(&mut state.projectiles, &mut state.enemies);
    if shot > 0 {
        log::debug!("Projectiles destroyed {} enemies", shot);
        events.push(GameEvent::EnemiesShot(shot));
    }

    for kind in collect_powerups(&mut state.player, &mut state.powerups, state.now_ms) {
        log::debug!("Collected {} power-up", kind.as_str());
        events.push(GameEvent::PowerUpCollected(kind));
    }

    if touches_goal(&state.player, state.goal.as_ref()) {
        end(state, EndReason::ReachedGoal, events);
        return;
    }

    prune(state);
}

fn end(state: &mut GameState, reason: EndReason, events: &mut Vec<GameEvent>) {
    state.phase = SessionPhase::Ended(reason);
    events.push(GameEvent::Ended(reason));
    prune(state);
}

fn prune(state: &mut GameState) {
    remove_dead(&mut state.enemies);
    remove_dead(&mut state.projectiles);
    remove_dead(&mut state.powerups);
}

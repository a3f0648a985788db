//! The controllable player: movement, jump physics and timed power-ups

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::rect::Rect;
use super::state::{PowerUpKind, Projectile};
use crate::consts::*;

/// A power-up effect that stays on until an absolute timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpTimer {
    pub active: bool,
    /// Session clock (ms) after which the effect switches off
    pub ends_at: u64,
}

impl PowerUpTimer {
    /// Switch on (or refresh) until `now + duration_ms`
    pub fn activate(&mut self, now: u64, duration_ms: u64) {
        self.active = true;
        self.ends_at = now + duration_ms;
    }

    /// Switch off once `now` is past the end time. Still active at exactly `ends_at`.
    pub fn expire(&mut self, now: u64) {
        if self.active && now > self.ends_at {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Vertical input held this tick (only used while flying)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightInput {
    pub up: bool,
    pub down: bool,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (positive is down)
    pub velocity_y: i32,
    pub on_ground: bool,
    pub lives: u32,
    pub shield: PowerUpTimer,
    pub fly: PowerUpTimer,
    pub fire: PowerUpTimer,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Standing on the ground at the start position
    pub fn new() -> Self {
        let mut rect = Rect::new(PLAYER_START_X, 0, PLAYER_SIZE, PLAYER_SIZE);
        rect.set_bottom(GROUND_Y);
        Self {
            rect,
            velocity_y: 0,
            on_ground: true,
            lives: PLAYER_START_LIVES,
            shield: PowerUpTimer::default(),
            fly: PowerUpTimer::default(),
            fire: PowerUpTimer::default(),
        }
    }

    pub fn move_left(&mut self) {
        self.rect.translate(-MOVE_STEP, 0);
    }

    pub fn move_right(&mut self) {
        self.rect.translate(MOVE_STEP, 0);
    }

    /// Start a jump if standing on the ground. Returns true if the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = JUMP_VELOCITY;
        self.on_ground = false;
        true
    }

    /// Advance one tick: expire power-ups, integrate vertical motion, clamp to screen
    pub fn update(&mut self, now: u64, flight: FlightInput) {
        self.shield.expire(now);
        self.fly.expire(now);
        self.fire.expire(now);

        if self.fly.active {
            // Flight replaces gravity entirely
            if flight.up {
                self.rect.translate(0, -FLY_STEP);
            }
            if flight.down {
                self.rect.translate(0, FLY_STEP);
            }
        } else {
            self.velocity_y += GRAVITY;
            self.rect.translate(0, self.velocity_y);
        }

        if self.rect.bottom() >= GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
            self.on_ground = true;
            self.velocity_y = 0;
        }

        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > SCREEN_WIDTH {
            self.rect.set_right(SCREEN_WIDTH);
        }
    }

    /// Apply a collected power-up. Timed kinds refresh their expiry if already active.
    pub fn activate_powerup(&mut self, kind: PowerUpKind, now: u64) {
        match kind {
            PowerUpKind::Life => self.lives += 1,
            PowerUpKind::Shield => self.shield.activate(now, SHIELD_DURATION_MS),
            PowerUpKind::Fly => self.fly.activate(now, FLY_DURATION_MS),
            PowerUpKind::Fire => self.fire.activate(now, FIRE_DURATION_MS),
        }
    }

    /// Fire a projectile from the right edge at mid height.
    ///
    /// Callers must check `can_fire` first.
    pub fn shoot(&self) -> Projectile {
        Projectile::new(IVec2::new(self.rect.right(), self.rect.center_y()))
    }

    #[inline]
    pub fn is_shielded(&self) -> bool {
        self.shield.active
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.fly.active
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.fire.active
    }

    /// Lose one life. Returns true if no lives are left.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

impl Entity for Player {
    fn rect(&self) -> Rect {
        self.rect
    }
}

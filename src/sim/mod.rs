//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick motion, time only from the sampled session clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order per collection)
//! - No rendering, audio or file dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{EnemyContact, resolve};
pub use entity::{Entity, collide_all, colliding_with, update_all};
pub use player::{FlightInput, Player, PowerUpTimer};
pub use rect::Rect;
pub use snapshot::{PlayerView, Snapshot, Sprite, SpriteKind};
pub use spawner::{IntervalTimer, Spawner, Spawns};
pub use state::{
    EndReason, Enemy, GameEvent, GameState, Goal, Obstacle, PowerUp, PowerUpKind, Projectile,
    SessionPhase,
};
pub use tick::{TickInput, tick};

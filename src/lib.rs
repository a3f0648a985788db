//! Pixel Jumper - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `session`: Session controller that drives `sim` and persists scores
//! - `highscores`: Ranked top 10 leaderboard and its file store
//! - `persistence`: JSON file helpers
//! - `settings`: User configuration
//! - `audio` / `renderer` / `platform`: Collaborator seams (sound, drawing, time and input)

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{HighScoreEntry, HighScoreFile, HighScores, MemoryScoreStore, ScoreStore};
pub use session::{Session, TickReport};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate
    pub const TICK_HZ: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// The player's bottom edge never goes below this line
    pub const GROUND_Y: i32 = 600;

    /// Player defaults
    pub const PLAYER_SIZE: i32 = 50;
    pub const PLAYER_START_X: i32 = 100;
    pub const PLAYER_START_LIVES: u32 = 3;
    /// Horizontal step per move command
    pub const MOVE_STEP: i32 = 10;
    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_VELOCITY: i32 = -20;
    /// Added to vertical velocity every tick
    pub const GRAVITY: i32 = 1;
    /// Vertical step per tick while flying
    pub const FLY_STEP: i32 = 5;

    /// Power-up durations (ms)
    pub const SHIELD_DURATION_MS: u64 = 5000;
    pub const FLY_DURATION_MS: u64 = 5000;
    pub const FIRE_DURATION_MS: u64 = 8000;

    /// Spawn schedule (ms)
    pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 2000;
    pub const POWERUP_SPAWN_INTERVAL_MS: u64 = 7000;
    /// Spawns appear just past the right edge
    pub const SPAWN_X: i32 = 800;
    pub const ENEMY_SPAWN_Y: i32 = 500;
    pub const POWERUP_SPAWN_Y_MIN: i32 = 400;
    pub const POWERUP_SPAWN_Y_MAX: i32 = 550;

    /// Enemy
    pub const ENEMY_SIZE: i32 = 50;
    pub const ENEMY_SPEED: i32 = 5;

    /// Power-up pickup
    pub const POWERUP_SIZE: i32 = 30;
    pub const POWERUP_SPEED: i32 = 3;

    /// Projectile
    pub const PROJECTILE_WIDTH: i32 = 10;
    pub const PROJECTILE_HEIGHT: i32 = 4;
    pub const PROJECTILE_SPEED: i32 = 10;

    /// Fixed level layout
    pub const OBSTACLE_X: i32 = 400;
    pub const OBSTACLE_Y: i32 = GROUND_Y - PLAYER_SIZE - 50;
    pub const OBSTACLE_SIZE: i32 = 50;
    pub const INITIAL_ENEMY_X: i32 = 600;
    pub const INITIAL_ENEMY_Y: i32 = 500;
    pub const GOAL_X: i32 = 760;
    pub const GOAL_Y: i32 = 500;
    pub const GOAL_WIDTH: i32 = 40;
    pub const GOAL_HEIGHT: i32 = 60;

    /// Name recorded with scores saved by the session
    pub const PLAYER_NAME: &str = "Player";
}

//! Game state and core simulation types
//!
//! The session owns everything here. Entities never reference each other;
//! interactions only happen in `collision` by reading two collections at a time.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::player::Player;
use super::rect::Rect;
use super::spawner::Spawner;
use crate::consts::*;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Lives ran out
    Died,
    /// Player touched the goal
    ReachedGoal,
    /// External quit signal
    Quit,
}

impl EndReason {
    /// Whether the score is written to the high score table
    pub fn persists_score(&self) -> bool {
        !matches!(self, EndReason::Quit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Died => "died",
            EndReason::ReachedGoal => "reached goal",
            EndReason::Quit => "quit",
        }
    }
}

/// Session lifecycle. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Running,
    Ended(EndReason),
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// One extra life, applied instantly
    Life,
    /// Absorbs one enemy hit
    Shield,
    /// Free vertical movement, no gravity
    Fly,
    /// Allows shooting
    Fire,
}

impl PowerUpKind {
    /// Every kind, in spawn-table order
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Life,
        PowerUpKind::Shield,
        PowerUpKind::Fly,
        PowerUpKind::Fire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Life => "life",
            PowerUpKind::Shield => "shield",
            PowerUpKind::Fly => "fly",
            PowerUpKind::Fire => "fire",
        }
    }
}

/// Static block. Never moves and is never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

impl Entity for Obstacle {
    fn rect(&self) -> Rect {
        self.rect
    }
}

/// Walks left at a constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            alive: true,
        }
    }
}

impl Entity for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn step(&mut self) {
        self.rect.translate(-ENEMY_SPEED, 0);
        if self.rect.right() < 0 {
            self.alive = false;
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// A collectable power-up drifting left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(x: i32, y: i32, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::new(x, y, POWERUP_SIZE, POWERUP_SIZE),
            kind,
            alive: true,
        }
    }
}

impl Entity for PowerUp {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn step(&mut self) {
        self.rect.translate(-POWERUP_SPEED, 0);
        if self.rect.right() < 0 {
            self.alive = false;
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// Player shot travelling right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub alive: bool,
}

impl Projectile {
    /// Projectile centred on `center`
    pub fn new(center: IVec2) -> Self {
        Self {
            rect: Rect::from_center(center, IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT)),
            alive: true,
        }
    }
}

impl Entity for Projectile {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn step(&mut self) {
        self.rect.translate(PROJECTILE_SPEED, 0);
        if self.rect.left() > SCREEN_WIDTH {
            self.alive = false;
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// End of the level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
}

impl Goal {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, GOAL_WIDTH, GOAL_HEIGHT),
        }
    }
}

impl Entity for Goal {
    fn rect(&self) -> Rect {
        self.rect
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Shot,
    EnemySpawned,
    PowerUpSpawned(PowerUpKind),
    /// Enemy touched a shielded player; the shield is gone
    ShieldAbsorbed,
    /// Enemy touched the player; `lives` is what remains
    LifeLost { lives: u32 },
    /// Number of enemies destroyed by projectiles this tick
    EnemiesShot(u32),
    PowerUpCollected(PowerUpKind),
    Ended(EndReason),
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for the spawner's RNG
    pub seed: u64,
    /// Session clock (ms) when the session started
    pub start_ms: u64,
    /// Session clock (ms) of the latest tick
    pub now_ms: u64,
    /// Whole seconds survived
    pub score: u64,
    /// Ticks simulated so far
    pub time_ticks: u64,
    pub phase: SessionPhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub projectiles: Vec<Projectile>,
    pub goal: Option<Goal>,
    pub spawner: Spawner,
}

impl GameState {
    /// New session at `start_ms` with the fixed level loaded
    pub fn new(seed: u64, start_ms: u64) -> Self {
        let mut state = Self::empty(seed, start_ms);
        state.load_level();
        state
    }

    /// New session with no level entities, only the player
    pub fn empty(seed: u64, start_ms: u64) -> Self {
        Self {
            seed,
            start_ms,
            now_ms: start_ms,
            score: 0,
            time_ticks: 0,
            phase: SessionPhase::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            projectiles: Vec::new(),
            goal: None,
            spawner: Spawner::new(seed, start_ms),
        }
    }

    /// Place the single obstacle, the first enemy and the goal
    pub fn load_level(&mut self) {
        self.obstacles.push(Obstacle::new(
            OBSTACLE_X,
            OBSTACLE_Y,
            OBSTACLE_SIZE,
            OBSTACLE_SIZE,
        ));
        self.enemies.push(Enemy::new(INITIAL_ENEMY_X, INITIAL_ENEMY_Y));
        self.goal = Some(Goal::new(GOAL_X, GOAL_Y));
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Reason the session ended, if it has
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            SessionPhase::Running => None,
            SessionPhase::Ended(reason) => Some(reason),
        }
    }

    /// Score for the session clock `now`: one point per whole elapsed second
    pub fn score_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.start_ms) / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loads_fixed_level() {
        let state = GameState::new(1, 0);
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].rect, Rect::new(400, 500, 50, 50));
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].rect.pos, IVec2::new(600, 500));
        assert_eq!(state.goal.as_ref().map(|g| g.rect), Some(Rect::new(760, 500, 40, 60)));
        assert!(state.powerups.is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_score_is_whole_seconds() {
        let state = GameState::empty(1, 500);
        assert_eq!(state.score_at(500), 0);
        assert_eq!(state.score_at(1499), 0);
        assert_eq!(state.score_at(1500), 1);
        assert_eq!(state.score_at(62_600), 62);
        // Clock earlier than start never underflows
        assert_eq!(state.score_at(0), 0);
    }

    #[test]
    fn test_enemy_leaves_screen() {
        let mut enemy = Enemy::new(-44, 500);
        enemy.step();
        assert_eq!(enemy.rect.right(), 1);
        assert!(enemy.is_alive());
        enemy.step();
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_powerup_drifts_left() {
        let mut p = PowerUp::new(800, 450, PowerUpKind::Fly);
        p.step();
        assert_eq!(p.rect.x(), 797);
        p.rect.set_right(2);
        p.step();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_projectile_leaves_right_edge() {
        let mut shot = Projectile::new(IVec2::new(795, 300));
        assert_eq!(shot.rect.left(), 790);
        shot.step();
        assert_eq!(shot.rect.left(), 800);
        assert!(shot.is_alive());
        shot.step();
        assert!(!shot.is_alive());
    }

    #[test]
    fn test_static_entities_ignore_kill() {
        let mut obstacle = Obstacle::new(0, 0, 10, 10);
        obstacle.kill();
        assert!(obstacle.is_alive());
    }

    #[test]
    fn test_quit_does_not_persist() {
        assert!(EndReason::Died.persists_score());
        assert!(EndReason::ReachedGoal.persists_score());
        assert!(!EndReason::Quit.persists_score());
    }
}

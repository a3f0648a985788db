//! Time-driven spawning of enemies and power-ups
//!
//! Timers compare against the sampled session clock, not a frame count, so
//! the spawn rate does not depend on how often `advance` is called.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Enemy, PowerUp, PowerUpKind};
use crate::consts::*;

/// Fires once every `interval_ms`, starting one interval after creation
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    pub interval_ms: u64,
    /// Session clock (ms) of the next firing
    pub next_at: u64,
}

impl IntervalTimer {
    pub fn new(start_ms: u64, interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_at: start_ms + interval_ms,
        }
    }

    /// How many times the timer fired up to and including `now`.
    ///
    /// Catches up: a clock jump across several intervals fires once per interval.
    pub fn poll(&mut self, now: u64) -> u32 {
        let mut fired = 0;
        while now >= self.next_at {
            self.next_at += self.interval_ms;
            fired += 1;
        }
        fired
    }
}

/// Whatever came due on one `advance` call
#[derive(Debug, Clone, Default)]
pub struct Spawns {
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
}

/// Two independent repeating timers plus a seeded RNG for power-up rolls
#[derive(Debug, Clone)]
pub struct Spawner {
    pub enemy_timer: IntervalTimer,
    pub powerup_timer: IntervalTimer,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64, start_ms: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), start_ms)
    }

    /// Use an already-built RNG (for replaying a recorded stream)
    pub fn with_rng(rng: Pcg32, start_ms: u64) -> Self {
        Self {
            enemy_timer: IntervalTimer::new(start_ms, ENEMY_SPAWN_INTERVAL_MS),
            powerup_timer: IntervalTimer::new(start_ms, POWERUP_SPAWN_INTERVAL_MS),
            rng,
        }
    }

    /// Create every entity that came due by `now`
    pub fn advance(&mut self, now: u64) -> Spawns {
        let mut spawns = Spawns::default();

        for _ in 0..self.enemy_timer.poll(now) {
            spawns.enemies.push(Enemy::new(SPAWN_X, ENEMY_SPAWN_Y));
        }

        for _ in 0..self.powerup_timer.poll(now) {
            let powerup = self.roll_powerup();
            log::debug!(
                "Spawning {} power-up at y={}",
                powerup.kind.as_str(),
                powerup.rect.y()
            );
            spawns.powerups.push(powerup);
        }

        spawns
    }

    /// Uniform kind and uniform y in the spawn band
    fn roll_powerup(&mut self) -> PowerUp {
        let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
        let y = self
            .rng
            .random_range(POWERUP_SPAWN_Y_MIN..=POWERUP_SPAWN_Y_MAX);
        PowerUp::new(SPAWN_X, y, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_interval_timer() {
        let mut timer = IntervalTimer::new(1000, 2000);
        assert_eq!(timer.poll(2999), 0);
        assert_eq!(timer.poll(3000), 1);
        assert_eq!(timer.poll(3001), 0);
        assert_eq!(timer.next_at, 5000);
    }

    #[test]
    fn test_interval_timer_catches_up() {
        let mut timer = IntervalTimer::new(0, 2000);
        assert_eq!(timer.poll(9000), 4);
        assert_eq!(timer.next_at, 10_000);
    }

    #[test]
    fn test_enemy_schedule() {
        let mut spawner = Spawner::new(7, 0);
        assert!(spawner.advance(1999).enemies.is_empty());

        let spawns = spawner.advance(2000);
        assert_eq!(spawns.enemies.len(), 1);
        assert_eq!(spawns.enemies[0].rect.x(), SPAWN_X);
        assert_eq!(spawns.enemies[0].rect.y(), ENEMY_SPAWN_Y);
        assert!(spawns.powerups.is_empty());

        assert_eq!(spawner.advance(4000).enemies.len(), 1);
    }

    #[test]
    fn test_frame_rate_independence() {
        // 60 Hz sampling and a single late sample see the same number of spawns
        let mut fast = Spawner::new(3, 0);
        let mut fast_enemies = 0;
        let mut fast_powerups = 0;
        for tick in 0..=(60 * 15) {
            let spawns = fast.advance(tick * 1000 / 60);
            fast_enemies += spawns.enemies.len();
            fast_powerups += spawns.powerups.len();
        }

        let mut slow = Spawner::new(3, 0);
        let spawns = slow.advance(15_000);
        assert_eq!(fast_enemies, 7);
        assert_eq!(fast_powerups, 2);
        assert_eq!(spawns.enemies.len(), fast_enemies);
        assert_eq!(spawns.powerups.len(), fast_powerups);
    }

    #[test]
    fn test_powerup_rolls_in_range() {
        let mut spawner = Spawner::new(42, 0);
        let spawns = spawner.advance(7000 * 200);
        assert_eq!(spawns.powerups.len(), 200);

        let mut kinds = HashSet::new();
        for p in &spawns.powerups {
            assert_eq!(p.rect.x(), SPAWN_X);
            assert!((POWERUP_SPAWN_Y_MIN..=POWERUP_SPAWN_Y_MAX).contains(&p.rect.y()));
            kinds.insert(p.kind);
        }
        assert_eq!(kinds.len(), 4);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Spawner::new(99999, 0);
        let mut b = Spawner::new(99999, 0);
        let sa = a.advance(70_000);
        let sb = b.advance(70_000);
        let ka: Vec<_> = sa.powerups.iter().map(|p| (p.kind, p.rect.y())).collect();
        let kb: Vec<_> = sb.powerups.iter().map(|p| (p.kind, p.rect.y())).collect();
        assert_eq!(ka, kb);
    }
}

//! Input sources
//!
//! A keyboard front end maps key events to `TickInput`. `Autopilot` is a
//! seeded driver for headless and demo runs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Snapshot, SpriteKind, TickInput};

/// Produces the input for the next tick, given the last drawn frame
pub trait InputSource {
    fn poll(&mut self, frame: &Snapshot) -> TickInput;
}

/// Where the autopilot is currently heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
    Idle,
}

/// Seeded demo player: chases power-ups, otherwise wanders mostly rightward
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    ticks: u64,
    max_ticks: Option<u64>,
    heading: Heading,
    /// Ticks left before picking a new wander heading
    heading_ticks: u32,
}

impl Autopilot {
    /// Ticks between shots while fire is active
    const FIRE_EVERY: u64 = 8;
    /// Chance per tick of a jump attempt
    const JUMP_CHANCE: f64 = 1.0 / 40.0;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
            max_ticks: None,
            heading: Heading::Right,
            heading_ticks: 0,
        }
    }

    /// Send quit once `max_ticks` inputs have been produced
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    fn wander(&mut self) -> Heading {
        if self.heading_ticks == 0 {
            let roll: f64 = self.rng.random();
            self.heading = if roll < 0.55 {
                Heading::Right
            } else if roll < 0.8 {
                Heading::Left
            } else {
                Heading::Idle
            };
            self.heading_ticks = self.rng.random_range(10..40);
        }
        self.heading_ticks -= 1;
        self.heading
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, frame: &Snapshot) -> TickInput {
        if self.max_ticks.is_some_and(|max| self.ticks >= max) {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }
        self.ticks += 1;

        let player = frame.player.rect;
        let center_x = player.x() + player.width() / 2;

        // Nearest power-up by horizontal distance
        let target = frame
            .sprites
            .iter()
            .filter(|s| matches!(s.kind, SpriteKind::PowerUp(_)))
            .min_by_key(|s| (s.rect.x() + s.rect.width() / 2 - center_x).abs());

        let heading = match target {
            Some(sprite) => {
                let dx = sprite.rect.x() + sprite.rect.width() / 2 - center_x;
                if dx > 5 {
                    Heading::Right
                } else if dx < -5 {
                    Heading::Left
                } else {
                    Heading::Idle
                }
            }
            None => self.wander(),
        };

        let mut input = TickInput {
            left: heading == Heading::Left,
            right: heading == Heading::Right,
            jump: self.rng.random_bool(Self::JUMP_CHANCE),
            fire: frame.player.fire && self.ticks % Self::FIRE_EVERY == 0,
            ..Default::default()
        };

        if frame.player.fly {
            // Hover toward the power-up band, or drift around mid-screen
            let target_y = target.map(|s| s.rect.y()).unwrap_or(350);
            input.up = player.y() > target_y;
            input.down = player.y() < target_y;
        }

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, PowerUp, PowerUpKind};

    #[test]
    fn test_max_ticks_sends_quit() {
        let frame = Snapshot::capture(&GameState::new(1, 0));
        let mut pilot = Autopilot::new(5).with_max_ticks(3);
        for _ in 0..3 {
            assert!(!pilot.poll(&frame).quit);
        }
        assert!(pilot.poll(&frame).quit);
    }

    #[test]
    fn test_chases_powerups() {
        let mut state = GameState::empty(1, 0);
        state.powerups.push(PowerUp::new(400, 500, PowerUpKind::Life));
        let frame = Snapshot::capture(&state);
        let mut pilot = Autopilot::new(5);
        for _ in 0..20 {
            let input = pilot.poll(&frame);
            assert!(input.right);
            assert!(!input.left);
        }
    }

    #[test]
    fn test_fires_only_with_fire_powerup() {
        let mut state = GameState::empty(1, 0);
        let mut pilot = Autopilot::new(5);
        let frame = Snapshot::capture(&state);
        assert!((0..32).all(|_| !pilot.poll(&frame).fire));

        state.player.activate_powerup(PowerUpKind::Fire, 0);
        let frame = Snapshot::capture(&state);
        assert_eq!((0..32).filter(|_| pilot.poll(&frame).fire).count(), 4);
    }

    #[test]
    fn test_same_seed_same_inputs() {
        let frame = Snapshot::capture(&GameState::new(1, 0));
        let mut a = Autopilot::new(77);
        let mut b = Autopilot::new(77);
        for _ in 0..500 {
            assert_eq!(a.poll(&frame), b.poll(&frame));
        }
    }
}

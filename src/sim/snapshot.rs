//! Read-only view of a frame for the render collaborator

use serde::Serialize;

use super::entity::Entity;
use super::rect::Rect;
use super::state::{GameState, PowerUpKind};

/// What a drawable is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "kind")]
pub enum SpriteKind {
    Obstacle,
    Enemy,
    PowerUp(PowerUpKind),
    Projectile,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub lives: u32,
    pub shield: bool,
    pub fly: bool,
    pub fire: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub score: u64,
    pub player: PlayerView,
    /// Live entities in draw order
    pub sprites: Vec<Sprite>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(
            state.obstacles.len()
                + state.enemies.len()
                + state.projectiles.len()
                + state.powerups.len()
                + 1,
        );
        push_all(&mut sprites, &state.obstacles, |_| SpriteKind::Obstacle);
        push_all(&mut sprites, &state.enemies, |_| SpriteKind::Enemy);
        push_all(&mut sprites, &state.projectiles, |_| SpriteKind::Projectile);
        push_all(&mut sprites, &state.powerups, |p| SpriteKind::PowerUp(p.kind));
        if let Some(goal) = &state.goal {
            sprites.push(Sprite {
                kind: SpriteKind::Goal,
                rect: goal.rect(),
            });
        }

        let player = &state.player;
        Self {
            score: state.score,
            player: PlayerView {
                rect: player.rect,
                lives: player.lives,
                shield: player.is_shielded(),
                fly: player.is_flying(),
                fire: player.can_fire(),
            },
            sprites,
        }
    }

    /// Number of sprites of a given kind
    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

fn push_all<E: Entity>(out: &mut Vec<Sprite>, entities: &[E], kind: impl Fn(&E) -> SpriteKind) {
    out.extend(
        entities
            .iter()
            .filter(|e| e.is_alive())
            .map(|e| Sprite {
                kind: kind(e),
                rect: e.rect(),
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_initial_level() {
        let state = GameState::new(1, 0);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.player.lives, 3);
        assert_eq!(snap.sprites.len(), 3);
        assert_eq!(snap.count(SpriteKind::Obstacle), 1);
        assert_eq!(snap.count(SpriteKind::Enemy), 1);
        assert_eq!(snap.count(SpriteKind::Goal), 1);
        assert!(!snap.player.shield);
    }

    #[test]
    fn test_serializes_for_frontends() {
        let mut state = GameState::empty(1, 0);
        state
            .powerups
            .push(crate::sim::PowerUp::new(10, 20, PowerUpKind::Fire));
        let json = serde_json::to_value(Snapshot::capture(&state)).unwrap();
        assert_eq!(json["sprites"][0]["kind"]["type"], "power_up");
        assert_eq!(json["sprites"][0]["kind"]["kind"], "fire");
    }
}

//! Shared entity capabilities and bulk collection helpers
//!
//! Every sprite kind exposes its bounds and a per-tick step. Collections are
//! plain `Vec`s kept in insertion order, so iteration is deterministic.

use super::rect::Rect;

/// Something with bounds that advances once per tick
pub trait Entity {
    /// Current bounds
    fn rect(&self) -> Rect;

    /// Advance by one tick
    fn step(&mut self) {}

    /// Dead entities are dropped from their collection and never collide again
    fn is_alive(&self) -> bool {
        true
    }

    /// Mark for removal. Static entities ignore this.
    fn kill(&mut self) {}
}

/// Step every entity, then drop the ones that died
pub fn update_all<E: Entity>(entities: &mut Vec<E>) {
    for entity in entities.iter_mut() {
        entity.step();
    }
    remove_dead(entities);
}

/// Drop dead entities, preserving order
pub fn remove_dead<E: Entity>(entities: &mut Vec<E>) {
    entities.retain(|e| e.is_alive());
}

/// Indices of live entities overlapping `rect`
pub fn colliding_with<E: Entity>(rect: &Rect, entities: &[E]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive() && rect.overlaps(&e.rect()))
        .map(|(i, _)| i)
        .collect()
}

/// All overlapping (a, b) index pairs between two collections
pub fn collide_all<A: Entity, B: Entity>(a: &[A], b: &[B]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, ea) in a.iter().enumerate() {
        if !ea.is_alive() {
            continue;
        }
        let ra = ea.rect();
        for (j, eb) in b.iter().enumerate() {
            if eb.is_alive() && ra.overlaps(&eb.rect()) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

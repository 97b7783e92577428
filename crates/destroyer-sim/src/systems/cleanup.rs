//! Cleanup system: removes bullets that have left the field.

use hecs::{Entity, World};

use destroyer_core::components::Bullet;
use destroyer_core::config::GameRules;
use destroyer_core::types::Position;

use crate::field;

/// Remove bullets outside the closed field rectangle. Bullets never wrap.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, rules: &GameRules, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if !field::contains(pos, rules) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

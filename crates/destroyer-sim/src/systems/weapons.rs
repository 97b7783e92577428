//! Weapons system: firing and the fire cooldown.

use hecs::World;

use destroyer_core::components::Ship;
use destroyer_core::config::GameRules;
use destroyer_core::constants::DOUBLE_SHOT_OFFSET;
use destroyer_core::enums::PowerUpKind;
use destroyer_core::types::{Position, Velocity};

use crate::effects::EffectController;
use crate::run_state::SpawnSequence;
use crate::world_setup;

/// Try to fire from the ship. Returns the number of bullets created
/// (0 while the cooldown is running).
pub fn fire(
    world: &mut World,
    rules: &GameRules,
    effects: &EffectController,
    sequence: &mut SpawnSequence,
) -> usize {
    let mut muzzle = None;
    for (_entity, (ship, pos)) in world.query_mut::<(&mut Ship, &Position)>() {
        if ship.fire_cooldown > 0 {
            continue;
        }
        ship.fire_cooldown = rules.fire_cooldown(effects.is_active(PowerUpKind::RapidFire));
        muzzle = Some((*pos, ship.heading));
    }

    let Some((origin, heading)) = muzzle else {
        return 0;
    };

    let spread: &[f64] = if effects.is_active(PowerUpKind::DoubleShot) {
        &[-DOUBLE_SHOT_OFFSET, DOUBLE_SHOT_OFFSET]
    } else {
        &[0.0]
    };

    for offset in spread {
        let velocity = Velocity::from_polar(heading + offset, rules.bullet_speed);
        world_setup::spawn_bullet(world, sequence, origin, velocity);
    }
    spread.len()
}

/// Count the fire cooldown down by one tick.
pub fn tick_cooldown(world: &mut World) {
    for (_entity, ship) in world.query_mut::<&mut Ship>() {
        ship.fire_cooldown = ship.fire_cooldown.saturating_sub(1);
    }
}

//! Kinematic integration for bullets, asteroids and power-ups.
//!
//! Bullets fly straight and are culled by the cleanup system once they leave
//! the field. Asteroids wrap around. Power-ups only bob in place.

use hecs::World;

use destroyer_core::components::{Asteroid, Bullet, PowerUp};
use destroyer_core::config::GameRules;
use destroyer_core::constants::{POWERUP_FLOAT_AMPLITUDE, POWERUP_FLOAT_STEP};
use destroyer_core::types::{Position, Velocity};

use crate::field;

/// Move every bullet by its velocity. No wrapping.
pub fn move_bullets(world: &mut World) {
    for (_entity, (_bullet, pos, vel)) in world.query_mut::<(&Bullet, &mut Position, &Velocity)>()
    {
        pos.advance(vel);
    }
}

/// Move every asteroid by its velocity and wrap it into the field.
pub fn move_asteroids(world: &mut World, rules: &GameRules) {
    for (_entity, (_asteroid, pos, vel)) in
        world.query_mut::<(&Asteroid, &mut Position, &Velocity)>()
    {
        pos.advance(vel);
        field::wrap_position(pos, rules);
    }
}

/// Advance the floating animation of every power-up.
pub fn float_power_ups(world: &mut World) {
    for (_entity, (power_up, pos)) in world.query_mut::<(&mut PowerUp, &mut Position)>() {
        power_up.age += POWERUP_FLOAT_STEP;
        pos.y += power_up.age.sin() * POWERUP_FLOAT_AMPLITUDE;
    }
}

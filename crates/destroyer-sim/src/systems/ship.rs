//! Ship control and flight system.
//!
//! Per tick: rotate, thrust (boosted under Booster), brake (Booster only),
//! drag, integrate, wrap.

use hecs::World;

use destroyer_core::commands::Intents;
use destroyer_core::components::{Ship, ShipControls};
use destroyer_core::config::GameRules;
use destroyer_core::constants::{BOOSTER_BRAKE_FACTOR, BOOSTER_THRUST_FACTOR};
use destroyer_core::enums::PowerUpKind;
use destroyer_core::types::{Position, Velocity};

use crate::effects::EffectController;
use crate::field;

/// Latch this tick's held controls onto the ship.
pub fn apply_intents(world: &mut World, intents: &Intents) {
    for (_entity, ship) in world.query_mut::<&mut Ship>() {
        ship.controls = ShipControls {
            rotate_left: intents.rotate_left,
            rotate_right: intents.rotate_right,
            thrust: intents.thrust,
            brake: intents.brake,
        };
    }
}

/// Advance the ship one tick.
pub fn run(world: &mut World, rules: &GameRules, effects: &EffectController) {
    let boosted = effects.is_active(PowerUpKind::Booster);
    let thrust_power = if boosted {
        rules.ship_thrust * BOOSTER_THRUST_FACTOR
    } else {
        rules.ship_thrust
    };

    for (_entity, (ship, pos, vel)) in
        world.query_mut::<(&mut Ship, &mut Position, &mut Velocity)>()
    {
        let controls = ship.controls;

        // Both may be held at once; they cancel out.
        if controls.rotate_left {
            ship.heading -= rules.ship_turn_rate;
        }
        if controls.rotate_right {
            ship.heading += rules.ship_turn_rate;
        }

        if controls.thrust {
            let push = Velocity::from_polar(ship.heading, thrust_power);
            vel.x += push.x;
            vel.y += push.y;
        }

        // The brake is a Booster capability; without it the control is inert.
        if controls.brake && boosted {
            vel.scale(BOOSTER_BRAKE_FACTOR);
        }

        vel.scale(rules.ship_drag);
        pos.advance(vel);
        field::wrap_position(pos, rules);
    }
}

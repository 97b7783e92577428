//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ship, bullets, asteroids and power-ups with
//! appropriate component bundles.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use destroyer_core::components::*;
use destroyer_core::config::GameRules;
use destroyer_core::constants::SHIP_INITIAL_HEADING;
use destroyer_core::enums::*;
use destroyer_core::types::{Position, Velocity};

use crate::run_state::SpawnSequence;
use crate::systems::spawner;

/// Set up a fresh run: the ship at the field center and the opening asteroids.
/// The world must already be empty.
pub fn setup_run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
) {
    spawn_ship(world, rules);
    spawner::populate(
        world,
        rng,
        rules,
        sequence,
        AsteroidTier::Large,
        rules.asteroid_initial_count,
    );
}

/// Spawn the player's ship at rest in the middle of the field, pointing up.
pub fn spawn_ship(world: &mut World, rules: &GameRules) -> hecs::Entity {
    world.spawn((
        Ship {
            heading: SHIP_INITIAL_HEADING,
            controls: ShipControls::default(),
            fire_cooldown: 0,
        },
        Position::new(rules.field_width / 2.0, rules.field_height / 2.0),
        Velocity::default(),
    ))
}

/// Spawn a bullet.
pub fn spawn_bullet(
    world: &mut World,
    sequence: &mut SpawnSequence,
    position: Position,
    velocity: Velocity,
) -> hecs::Entity {
    world.spawn((Bullet, sequence.stamp(), position, velocity))
}

/// Spawn an asteroid of `tier`.
pub fn spawn_asteroid(
    world: &mut World,
    sequence: &mut SpawnSequence,
    tier: AsteroidTier,
    position: Position,
    velocity: Velocity,
) -> hecs::Entity {
    world.spawn((Asteroid { tier }, sequence.stamp(), position, velocity))
}

/// Spawn a power-up of `kind`.
pub fn spawn_power_up(
    world: &mut World,
    sequence: &mut SpawnSequence,
    kind: PowerUpKind,
    position: Position,
) -> hecs::Entity {
    world.spawn((PowerUp { kind, age: 0.0 }, sequence.stamp(), position))
}

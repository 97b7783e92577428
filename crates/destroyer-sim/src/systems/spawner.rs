//! Spawner: decides when and where asteroids and power-ups appear.

use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use destroyer_core::components::Asteroid;
use destroyer_core::config::GameRules;
use destroyer_core::enums::{AsteroidTier, PowerUpKind};
use destroyer_core::events::SimEvent;
use destroyer_core::types::{Position, Velocity};

use crate::run_state::{DropSchedule, RunState, SpawnSequence};
use crate::world_setup;

/// A fragment created by a split, in creation order.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub entity: hecs::Entity,
    pub tier: AsteroidTier,
    pub position: Position,
}

/// Spawn an asteroid just outside a uniformly chosen field edge, drifting in a
/// random direction at a speed in `[asteroid_min_speed, asteroid_max_speed)`.
pub fn spawn_edge_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
    tier: AsteroidTier,
) -> hecs::Entity {
    let heading = rng.gen_range(0.0..std::f64::consts::TAU);
    let speed = rng.gen_range(rules.asteroid_min_speed..rules.asteroid_max_speed);
    let offset = rules.asteroid_size(tier) / 2.0;

    let position = match rng.gen_range(0..4) {
        // top
        0 => Position::new(rng.gen_range(0.0..rules.field_width), -offset),
        // right
        1 => Position::new(
            rules.field_width + offset,
            rng.gen_range(0.0..rules.field_height),
        ),
        // bottom
        2 => Position::new(
            rng.gen_range(0.0..rules.field_width),
            rules.field_height + offset,
        ),
        // left
        _ => Position::new(-offset, rng.gen_range(0.0..rules.field_height)),
    };

    world_setup::spawn_asteroid(
        world,
        sequence,
        tier,
        position,
        Velocity::from_polar(heading, speed),
    )
}

/// Spawn `count` edge asteroids of `tier`.
pub fn populate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
    tier: AsteroidTier,
    count: u32,
) {
    for _ in 0..count {
        spawn_edge_asteroid(world, rng, rules, sequence, tier);
    }
}

/// Refill a cleared field with fresh Large asteroids. Returns true if it did.
pub fn replenish(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
    events: &mut Vec<SimEvent>,
) -> bool {
    let remaining = world.query::<&Asteroid>().iter().count();
    if remaining > 0 {
        return false;
    }

    let count = rules.asteroid_replenish_count;
    populate(world, rng, rules, sequence, AsteroidTier::Large, count);
    debug!("field cleared, spawned {count} large asteroids");
    events.push(SimEvent::FieldReplenished { count });
    true
}

/// Destroy `asteroid`: award its points, release its fragments and roll the
/// power-up drop counter. Returns the fragments created, oldest first.
///
/// Fragments sit at the parent's position with fresh, independent velocity
/// components in `[-fragment_max_axis_speed, fragment_max_axis_speed)`.
#[allow(clippy::too_many_arguments)]
pub fn split_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
    run: &mut RunState,
    drops: &mut DropSchedule,
    events: &mut Vec<SimEvent>,
    asteroid: hecs::Entity,
) -> Vec<Fragment> {
    let (tier, position) = match (
        world.get::<&Asteroid>(asteroid),
        world.get::<&Position>(asteroid),
    ) {
        (Ok(a), Ok(p)) => (a.tier, *p),
        _ => return Vec::new(),
    };
    let _ = world.despawn(asteroid);

    let points = rules.asteroid_points(tier);
    run.award(points);
    events.push(SimEvent::AsteroidDestroyed { tier, points });

    let mut fragments = Vec::with_capacity(tier.fragment_count());
    if let Some(child_tier) = tier.fragment() {
        let bound = rules.fragment_max_axis_speed;
        for _ in 0..tier.fragment_count() {
            let velocity = Velocity::new(rng.gen_range(-bound..bound), rng.gen_range(-bound..bound));
            let entity =
                world_setup::spawn_asteroid(world, sequence, child_tier, position, velocity);
            fragments.push(Fragment {
                entity,
                tier: child_tier,
                position,
            });
        }
    }

    if drops.record_destroyed() {
        drop_power_up(world, rng, sequence, events, position);
        drops.resample(rng, rules);
    }

    fragments
}

/// Place a power-up of a uniformly random kind at `position`.
pub fn drop_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    sequence: &mut SpawnSequence,
    events: &mut Vec<SimEvent>,
    position: Position,
) -> PowerUpKind {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    world_setup::spawn_power_up(world, sequence, kind, position);
    debug!("dropped {kind:?} at ({:.1}, {:.1})", position.x, position.y);
    events.push(SimEvent::PowerUpDropped { kind });
    kind
}

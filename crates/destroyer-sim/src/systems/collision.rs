//! Collision detection and resolution.
//!
//! All tests are circle tests on center distance with a strict `<`.
//! Pools are scanned newest first (descending `SpawnOrder`); that order
//! decides which asteroid a bullet hits when several overlap it.

use hecs::{Entity, World};
use log::{debug, trace};
use rand_chacha::ChaCha8Rng;

use destroyer_core::components::{Asteroid, Bullet, PowerUp, Ship, SpawnOrder};
use destroyer_core::config::GameRules;
use destroyer_core::enums::PowerUpKind;
use destroyer_core::events::SimEvent;
use destroyer_core::types::Position;

use crate::effects::EffectController;
use crate::run_state::{DropSchedule, RunState, SpawnSequence};
use crate::systems::spawner;

/// An asteroid still eligible to be hit this pass.
#[derive(Debug, Clone, Copy)]
struct Target {
    entity: Entity,
    position: Position,
    radius: f64,
}

/// Whether two centers are closer than `threshold`.
pub fn overlaps(a: &Position, b: &Position, threshold: f64) -> bool {
    a.distance_to(b) < threshold
}

/// Current ship position, if a ship exists.
pub fn ship_position(world: &World) -> Option<Position> {
    world
        .query::<(&Ship, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Bullet ↔ asteroid pass. Each bullet destroys at most one asteroid, the
/// first match in scan order; fragments created mid-pass can be hit by later
/// bullets. Returns the number of asteroids destroyed.
#[allow(clippy::too_many_arguments)]
pub fn resolve_bullet_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &GameRules,
    sequence: &mut SpawnSequence,
    run: &mut RunState,
    drops: &mut DropSchedule,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    let mut bullets: Vec<(SpawnOrder, Entity, Position)> = world
        .query::<(&Bullet, &SpawnOrder, &Position)>()
        .iter()
        .map(|(entity, (_, order, pos))| (*order, entity, *pos))
        .collect();
    bullets.sort_by(|a, b| b.0.cmp(&a.0));

    let mut ordered: Vec<(SpawnOrder, Target)> = world
        .query::<(&Asteroid, &SpawnOrder, &Position)>()
        .iter()
        .map(|(entity, (asteroid, order, pos))| {
            let target = Target {
                entity,
                position: *pos,
                radius: rules.asteroid_size(asteroid.tier) / 2.0,
            };
            (*order, target)
        })
        .collect();
    ordered.sort_by(|a, b| b.0.cmp(&a.0));
    let mut targets: Vec<Target> = ordered.into_iter().map(|(_, t)| t).collect();

    let mut destroyed = 0;
    for (_order, bullet, bullet_pos) in bullets {
        let Some(idx) = targets
            .iter()
            .position(|t| overlaps(&bullet_pos, &t.position, t.radius))
        else {
            continue;
        };

        let target = targets.remove(idx);
        despawn_buffer.push(bullet);
        trace!(
            "bullet hit asteroid at ({:.1}, {:.1})",
            target.position.x,
            target.position.y
        );

        let fragments = spawner::split_asteroid(
            world,
            rng,
            rules,
            sequence,
            run,
            drops,
            events,
            target.entity,
        );
        destroyed += 1;

        // Fragments are the newest asteroids, so they lead the scan.
        for fragment in fragments {
            targets.insert(
                0,
                Target {
                    entity: fragment.entity,
                    position: fragment.position,
                    radius: rules.asteroid_size(fragment.tier) / 2.0,
                },
            );
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    destroyed
}

/// Ship ↔ asteroid test. True if any asteroid touches the ship.
pub fn ship_hit(world: &World, rules: &GameRules) -> bool {
    let Some(ship_pos) = ship_position(world) else {
        return false;
    };

    let mut query = world.query::<(&Asteroid, &Position)>();
    let hit = query.iter().any(|(_, (asteroid, pos))| {
        let threshold = (rules.asteroid_size(asteroid.tier) + rules.ship_size) / 2.0;
        overlaps(&ship_pos, pos, threshold)
    });
    hit
}

/// Ship ↔ power-up pass. Every touched power-up is consumed and activated;
/// when several are touched in one tick, the oldest is applied last and wins.
pub fn collect_power_ups(
    world: &mut World,
    rules: &GameRules,
    effects: &mut EffectController,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Option<PowerUpKind> {
    despawn_buffer.clear();

    let ship_pos = ship_position(world)?;
    let threshold = (rules.ship_size + rules.powerup_size) / 2.0;

    let mut touched: Vec<(SpawnOrder, Entity, PowerUpKind)> = world
        .query::<(&PowerUp, &SpawnOrder, &Position)>()
        .iter()
        .filter(|(_, (_, _, pos))| overlaps(&ship_pos, pos, threshold))
        .map(|(entity, (power_up, order, _))| (*order, entity, power_up.kind))
        .collect();
    touched.sort_by(|a, b| b.0.cmp(&a.0));

    let mut applied = None;
    for (_order, entity, kind) in touched {
        effects.activate(kind, rules.powerup_duration_ticks);
        events.push(SimEvent::PowerUpCollected { kind });
        debug!("collected {kind:?}");
        despawn_buffer.push(entity);
        applied = Some(kind);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    applied
}

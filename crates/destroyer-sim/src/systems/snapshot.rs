//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only.

use std::cmp::Reverse;

use hecs::World;

use destroyer_core::components::*;
use destroyer_core::config::GameRules;
use destroyer_core::constants::{AIM_BEAM_LENGTH, TICK_RATE};
use destroyer_core::enums::PowerUpKind;
use destroyer_core::events::SimEvent;
use destroyer_core::state::*;
use destroyer_core::types::{Position, SimTime, Velocity};

use crate::effects::EffectController;
use crate::run_state::RunState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    rules: &GameRules,
    run: &RunState,
    effects: &EffectController,
    events: &[SimEvent],
) -> GameStateSnapshot {
    let ship = build_ship(world);

    GameStateSnapshot {
        time: *time,
        phase: run.phase,
        score: run.score,
        aim_beam: build_aim_beam(&ship, effects),
        ship,
        bullets: build_bullets(world),
        asteroids: build_asteroids(world, rules),
        power_ups: build_power_ups(world),
        effect: build_effect(effects),
        events: events.to_vec(),
    }
}

/// Build ShipView from the single Ship entity.
fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, vel))| ShipView {
            position: *pos,
            velocity: *vel,
            heading: ship.heading,
            thrusting: ship.controls.thrust,
            fire_cooldown: ship.fire_cooldown,
        })
        .unwrap_or_default()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(SpawnOrder, BulletView)> = world
        .query::<(&Bullet, &SpawnOrder, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, order, pos, vel))| {
            let view = BulletView {
                position: *pos,
                velocity: *vel,
            };
            (*order, view)
        })
        .collect();

    bullets.sort_by_key(|(order, _)| Reverse(*order));
    bullets.into_iter().map(|(_, view)| view).collect()
}

fn build_asteroids(world: &World, rules: &GameRules) -> Vec<AsteroidView> {
    let mut asteroids: Vec<(SpawnOrder, AsteroidView)> = world
        .query::<(&Asteroid, &SpawnOrder, &Position, &Velocity)>()
        .iter()
        .map(|(_, (asteroid, order, pos, vel))| {
            let view = AsteroidView {
                position: *pos,
                velocity: *vel,
                tier: asteroid.tier,
                size: rules.asteroid_size(asteroid.tier),
            };
            (*order, view)
        })
        .collect();

    asteroids.sort_by_key(|(order, _)| Reverse(*order));
    asteroids.into_iter().map(|(_, view)| view).collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<(SpawnOrder, PowerUpView)> = world
        .query::<(&PowerUp, &SpawnOrder, &Position)>()
        .iter()
        .map(|(_, (power_up, order, pos))| {
            let view = PowerUpView {
                position: *pos,
                kind: power_up.kind,
                age: power_up.age,
            };
            (*order, view)
        })
        .collect();

    power_ups.sort_by_key(|(order, _)| Reverse(*order));
    power_ups.into_iter().map(|(_, view)| view).collect()
}

fn build_effect(effects: &EffectController) -> EffectView {
    EffectView {
        active: effects.active(),
        remaining_ticks: effects.remaining_ticks(),
        remaining_secs: effects.remaining_ticks() / TICK_RATE,
    }
}

/// Aiming line from the ship along its heading while AimBeam is active.
fn build_aim_beam(ship: &ShipView, effects: &EffectController) -> Option<BeamView> {
    if !effects.is_active(PowerUpKind::AimBeam) {
        return None;
    }
    Some(BeamView {
        start: ship.position,
        end: ship.position.project(ship.heading, AIM_BEAM_LENGTH),
    })
}

//! A simple pilot for headless demo runs.
//!
//! Turns toward the nearest asteroid, thrusts while it is far away and fires
//! once the nose is roughly on target. Bullets do not wrap, so targets are
//! measured straight across the field rather than around the torus.

use std::f64::consts::{PI, TAU};

use destroyer_core::commands::Intents;
use destroyer_core::config::GameRules;
use destroyer_core::constants::BULLET_SPEED;
use destroyer_core::state::{AsteroidView, GameStateSnapshot};

/// Tuning for [`Autopilot`].
#[derive(Debug, Clone, Copy)]
pub struct AutopilotConfig {
    /// Fire when the heading error is below this (radians).
    pub fire_cone: f64,
    /// Thrust only while the target is farther than this.
    pub standoff: f64,
    /// Keep thrusting only while slower than this.
    pub max_speed: f64,
    /// Heading errors below this count as aligned; avoids jitter.
    pub turn_deadband: f64,
    /// Bullet speed used for the lead; must match the engine's rules.
    pub bullet_speed: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            fire_cone: 0.12,
            standoff: 220.0,
            max_speed: 2.5,
            turn_deadband: 0.03,
            bullet_speed: BULLET_SPEED,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    config: AutopilotConfig,
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self { config }
    }

    /// Default tuning, leading targets at the rules' bullet speed.
    pub fn for_rules(rules: &GameRules) -> Self {
        Self::new(AutopilotConfig {
            bullet_speed: rules.bullet_speed,
            ..Default::default()
        })
    }

    /// Decide the next tick's intents from the latest snapshot.
    pub fn next_intents(&self, snapshot: &GameStateSnapshot) -> Intents {
        let ship = &snapshot.ship;
        let Some(target) = nearest(snapshot) else {
            return Intents::default();
        };

        let cfg = &self.config;
        let distance = ship.position.distance_to(&target.position);
        // First-order lead: where the target will be when a bullet gets there.
        let flight = distance / cfg.bullet_speed;
        let dx = target.position.x + target.velocity.x * flight - ship.position.x;
        let dy = target.position.y + target.velocity.y * flight - ship.position.y;
        let error = angle_delta(ship.heading, dy.atan2(dx));

        Intents {
            rotate_left: error < -cfg.turn_deadband,
            rotate_right: error > cfg.turn_deadband,
            thrust: distance > cfg.standoff
                && error.abs() < cfg.fire_cone * 2.0
                && ship.velocity.speed() < cfg.max_speed,
            brake: distance < target.size,
            fire: error.abs() < cfg.fire_cone && ship.fire_cooldown == 0,
        }
    }
}

fn nearest(snapshot: &GameStateSnapshot) -> Option<&AsteroidView> {
    let origin = snapshot.ship.position;
    snapshot.asteroids.iter().min_by(|a, b| {
        origin
            .distance_to(&a.position)
            .total_cmp(&origin.distance_to(&b.position))
    })
}

/// Signed shortest rotation from `from` to `to`, in `(-PI, PI]`.
fn angle_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

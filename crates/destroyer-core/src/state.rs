//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RunPhase,
    pub score: u32,
    pub ship: ShipView,
    /// Newest first.
    pub bullets: Vec<BulletView>,
    /// Newest first.
    pub asteroids: Vec<AsteroidView>,
    /// Newest first.
    pub power_ups: Vec<PowerUpView>,
    pub effect: EffectView,
    /// Segment to draw while AimBeam is active.
    pub aim_beam: Option<BeamView>,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<SimEvent>,
}

/// Ship pose for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity: Velocity,
    /// Heading in radians.
    pub heading: f64,
    /// Whether thrust is held (for the exhaust flame).
    pub thrusting: bool,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Position,
    pub velocity: Velocity,
    pub tier: AsteroidTier,
    /// Collision diameter.
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Position,
    pub kind: PowerUpKind,
    pub age: f64,
}

/// Active effect status for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub active: Option<PowerUpKind>,
    /// Remaining duration in ticks.
    pub remaining_ticks: u32,
    /// Remaining duration in whole seconds.
    pub remaining_secs: u32,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamView {
    pub start: Position,
    pub end: Position,
}

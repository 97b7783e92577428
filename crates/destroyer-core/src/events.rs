//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new run began (initial setup or restart).
    RunStarted,
    /// A bullet destroyed an asteroid.
    AsteroidDestroyed { tier: AsteroidTier, points: u32 },
    /// A power-up appeared where an asteroid was destroyed.
    PowerUpDropped { kind: PowerUpKind },
    /// The ship collected a power-up.
    PowerUpCollected { kind: PowerUpKind },
    /// The active effect ran out.
    EffectExpired { kind: PowerUpKind },
    /// The field was cleared and fresh asteroids were spawned.
    FieldReplenished { count: u32 },
    /// The ship hit an asteroid; the run is over.
    ShipDestroyed { final_score: u32 },
}

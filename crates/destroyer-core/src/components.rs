//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Held movement controls, written from intents at the start of each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipControls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub brake: bool,
}

/// The player's ship. Exactly one exists while a run is set up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Heading in radians (0 = +x, positive turns clockwise on screen).
    pub heading: f64,
    pub controls: ShipControls,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
}

/// Marks a player bullet. Bullets have no size; they are point projectiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// An asteroid of a given tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    pub tier: AsteroidTier,
}

/// A floating, collectible power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Animation phase; has no gameplay effect.
    pub age: f64,
}

/// Monotonic creation stamp. Pools are iterated by this, newest first,
/// so that tie-breaks do not depend on ECS storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Asteroid size class. Ordered from biggest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// The tier produced when an asteroid of this tier is split, if any.
    pub fn fragment(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }

    /// Number of fragments released on destruction.
    pub fn fragment_count(self) -> usize {
        if self.fragment().is_some() {
            2
        } else {
            0
        }
    }
}

/// Collectible power-up kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Renders an aiming line along the ship's heading.
    AimBeam,
    /// Fires two diverging bullets per shot.
    DoubleShot,
    /// Stronger thrust and enables the brake.
    Booster,
    /// Shorter fire cooldown.
    RapidFire,
}

impl PowerUpKind {
    /// All kinds, in declaration order. Drops sample uniformly from this.
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::AimBeam,
        PowerUpKind::DoubleShot,
        PowerUpKind::Booster,
        PowerUpKind::RapidFire,
    ];
}

/// Top-level run phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    Running,
    GameOver,
}

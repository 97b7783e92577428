//! Presentation attributes for power-up kinds.
//!
//! The simulation never reads this table; it exists so every renderer
//! draws the same color and label for a kind.

use serde::Serialize;

use crate::enums::PowerUpKind;

/// How a power-up kind is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerUpDisplay {
    pub kind: PowerUpKind,
    /// HUD name.
    pub name: &'static str,
    /// Single-letter badge drawn on the pickup.
    pub label: char,
    /// RGB fill color.
    pub color: [u8; 3],
}

/// One entry per kind, in [`PowerUpKind::ALL`] order.
pub static POWERUP_DISPLAY: [PowerUpDisplay; 4] = [
    PowerUpDisplay {
        kind: PowerUpKind::AimBeam,
        name: "AIM BEAM",
        label: 'A',
        color: [0, 255, 0],
    },
    PowerUpDisplay {
        kind: PowerUpKind::DoubleShot,
        name: "DOUBLE SHOT",
        label: 'D',
        color: [0, 0, 255],
    },
    PowerUpDisplay {
        kind: PowerUpKind::Booster,
        name: "BOOSTER",
        label: 'B',
        color: [255, 200, 0],
    },
    PowerUpDisplay {
        kind: PowerUpKind::RapidFire,
        name: "RAPID FIRE",
        label: 'R',
        color: [255, 0, 0],
    },
];

/// Look up the display attributes of `kind`.
pub fn display_for(kind: PowerUpKind) -> &'static PowerUpDisplay {
    match kind {
        PowerUpKind::AimBeam => &POWERUP_DISPLAY[0],
        PowerUpKind::DoubleShot => &POWERUP_DISPLAY[1],
        PowerUpKind::Booster => &POWERUP_DISPLAY[2],
        PowerUpKind::RapidFire => &POWERUP_DISPLAY[3],
    }
}

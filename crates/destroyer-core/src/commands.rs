//! Player input sent to the simulation.
//!
//! Raw key events are reduced to [`PlayerCommand`]s by the input layer,
//! which in turn folds them into one [`Intents`] value per tick.

use serde::{Deserialize, Serialize};

/// Everything the simulation reads from the player for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub brake: bool,
    /// A shot was requested since the previous tick.
    pub fire: bool,
}

/// A held control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    RotateLeft,
    RotateRight,
    Thrust,
    Brake,
}

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A control key went down.
    Press { control: Control },
    /// A control key went up.
    Release { control: Control },
    /// Fire once on the next tick.
    Fire,
    /// Start a new run (honoured after game over).
    Restart,
}

//! Folds player commands arriving between ticks into per-tick intents.
//!
//! Held controls stay set until released. A fire request is latched and
//! consumed by the next tick, so a tap between two ticks is never lost.

use destroyer_core::commands::{Control, Intents, PlayerCommand};

#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    held: Intents,
    fire_pending: bool,
    restart_pending: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Press { control } => self.set(control, true),
            PlayerCommand::Release { control } => self.set(control, false),
            PlayerCommand::Fire => self.fire_pending = true,
            PlayerCommand::Restart => self.restart_pending = true,
        }
    }

    fn set(&mut self, control: Control, down: bool) {
        match control {
            Control::RotateLeft => self.held.rotate_left = down,
            Control::RotateRight => self.held.rotate_right = down,
            Control::Thrust => self.held.thrust = down,
            Control::Brake => self.held.brake = down,
        }
    }

    /// Intents for the next tick. Clears the fire latch.
    pub fn take_intents(&mut self) -> Intents {
        Intents {
            fire: std::mem::take(&mut self.fire_pending),
            ..self.held
        }
    }

    /// Whether a restart was requested since the last call. Clears the latch.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }
}

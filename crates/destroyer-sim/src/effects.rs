//! Timed power-up effect state.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. At most one effect is
//! in force; picking up another replaces it.

use destroyer_core::enums::PowerUpKind;

/// The single active effect and its countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectController {
    active: Option<PowerUpKind>,
    remaining_ticks: u32,
}

impl EffectController {
    /// Put `kind` in force for `duration_ticks`, discarding whatever was active.
    pub fn activate(&mut self, kind: PowerUpKind, duration_ticks: u32) {
        self.active = Some(kind);
        self.remaining_ticks = duration_ticks;
        if duration_ticks == 0 {
            self.active = None;
        }
    }

    /// Count down one tick. Returns the kind that expired on this tick, if any.
    pub fn tick(&mut self) -> Option<PowerUpKind> {
        if self.remaining_ticks == 0 {
            return None;
        }
        self.remaining_ticks -= 1;
        if self.remaining_ticks == 0 {
            self.active.take()
        } else {
            None
        }
    }

    /// Drop any active effect.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active(&self) -> Option<PowerUpKind> {
        self.active
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active == Some(kind)
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }
}

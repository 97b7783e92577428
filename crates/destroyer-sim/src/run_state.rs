//! Per-run bookkeeping: score, phase, power-up drop schedule, spawn stamps.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use destroyer_core::components::SpawnOrder;
use destroyer_core::config::GameRules;
use destroyer_core::enums::RunPhase;

/// Score and phase of the current run.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub score: u32,
    pub phase: RunPhase,
    pub asteroids_destroyed: u32,
}

impl RunState {
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.asteroids_destroyed += 1;
    }
}

/// Counts destroyed asteroids toward the next power-up drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropSchedule {
    /// Asteroids destroyed since the last drop.
    pub destroyed_since_last_drop: u32,
    /// Destructions required for the next drop.
    pub destroyed_until_next_drop: u32,
}

impl DropSchedule {
    /// Fresh schedule with a newly drawn threshold.
    pub fn new(rng: &mut ChaCha8Rng, rules: &GameRules) -> Self {
        let mut schedule = Self::default();
        schedule.resample(rng, rules);
        schedule
    }

    /// Reset the counter and draw a threshold uniformly in `[drop_min, drop_max]`.
    pub fn resample(&mut self, rng: &mut ChaCha8Rng, rules: &GameRules) {
        self.destroyed_since_last_drop = 0;
        self.destroyed_until_next_drop =
            rng.gen_range(rules.powerup_drop_min..=rules.powerup_drop_max);
    }

    /// Record one destruction. Returns true when a drop is due.
    pub fn record_destroyed(&mut self) -> bool {
        self.destroyed_since_last_drop += 1;
        self.destroyed_since_last_drop >= self.destroyed_until_next_drop
    }
}

/// Hands out increasing [`SpawnOrder`] stamps.
#[derive(Debug, Clone, Default)]
pub struct SpawnSequence {
    next: u64,
}

impl SpawnSequence {
    pub fn stamp(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

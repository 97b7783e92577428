//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all run state, advances it
//! one fixed tick per `step()`, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use hecs::World;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use destroyer_core::commands::Intents;
use destroyer_core::components::{Asteroid, Bullet, PowerUp};
use destroyer_core::config::{ConfigError, GameRules};
use destroyer_core::enums::RunPhase;
use destroyer_core::events::SimEvent;
use destroyer_core::state::GameStateSnapshot;
use destroyer_core::types::SimTime;

use crate::effects::EffectController;
use crate::run_state::{DropSchedule, RunState, SpawnSequence};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: GameRules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rules: GameRules,
    rng: ChaCha8Rng,
    run: RunState,
    drops: DropSchedule,
    effects: EffectController,
    sequence: SpawnSequence,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine and set up the first run. Fails if the rules are
    /// unusable (non-positive field, empty ranges and so on).
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.rules.validate()?;

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            rules: config.rules,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run: RunState::default(),
            drops: DropSchedule::default(),
            effects: EffectController::default(),
            sequence: SpawnSequence::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.restart();
        Ok(engine)
    }

    /// Discard all entities and run state and start a fresh run.
    ///
    /// The RNG is not reseeded, so consecutive runs differ.
    pub fn restart(&mut self) {
        self.world.clear();
        self.sequence = SpawnSequence::default();
        self.run = RunState::default();
        self.effects.clear();
        self.drops = DropSchedule::new(&mut self.rng, &self.rules);
        self.despawn_buffer.clear();
        self.events.clear();
        self.time = SimTime::default();

        world_setup::setup_run(
            &mut self.world,
            &mut self.rng,
            &self.rules,
            &mut self.sequence,
        );

        self.events.push(SimEvent::RunStarted);
        info!(
            "run started: {} asteroids, next drop after {}",
            self.rules.asteroid_initial_count, self.drops.destroyed_until_next_drop
        );
    }

    /// Advance the simulation by one tick. Does nothing once the run is over.
    pub fn step(&mut self, intents: &Intents) {
        self.events.clear();
        if self.run.phase == RunPhase::GameOver {
            return;
        }

        // 1. Ship: latch controls, fire, fly
        systems::ship::apply_intents(&mut self.world, intents);
        if intents.fire {
            systems::weapons::fire(
                &mut self.world,
                &self.rules,
                &self.effects,
                &mut self.sequence,
            );
        }
        systems::ship::run(&mut self.world, &self.rules, &self.effects);

        // 2. Bullets: move, cull
        systems::movement::move_bullets(&mut self.world);
        systems::cleanup::run(&mut self.world, &self.rules, &mut self.despawn_buffer);

        // 3. Asteroids: move, wrap
        systems::movement::move_asteroids(&mut self.world, &self.rules);

        // 4. Power-ups: float, pickup
        systems::movement::float_power_ups(&mut self.world);
        systems::collision::collect_power_ups(
            &mut self.world,
            &self.rules,
            &mut self.effects,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 5. Collisions
        systems::collision::resolve_bullet_hits(
            &mut self.world,
            &mut self.rng,
            &self.rules,
            &mut self.sequence,
            &mut self.run,
            &mut self.drops,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if systems::collision::ship_hit(&self.world, &self.rules) {
            self.run.phase = RunPhase::GameOver;
            self.events.push(SimEvent::ShipDestroyed {
                final_score: self.run.score,
            });
            info!(
                "ship destroyed at tick {}, final score {}",
                self.time.tick, self.run.score
            );
        } else {
            // 6. Replenish
            systems::spawner::replenish(
                &mut self.world,
                &mut self.rng,
                &self.rules,
                &mut self.sequence,
                &mut self.events,
            );
        }

        // 7. Timers (still counted on the fatal tick)
        self.tick_timers();
        self.time.advance();
    }

    fn tick_timers(&mut self) {
        systems::weapons::tick_cooldown(&mut self.world);
        if let Some(kind) = self.effects.tick() {
            debug!("{kind:?} expired");
            self.events.push(SimEvent::EffectExpired { kind });
        }
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.rules,
            &self.run,
            &self.effects,
            &self.events,
        )
    }

    /// Step once and return the resulting snapshot.
    pub fn tick(&mut self, intents: &Intents) -> GameStateSnapshot {
        self.step(intents);
        self.snapshot()
    }

    pub fn phase(&self) -> RunPhase {
        self.run.phase
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn effects(&self) -> &EffectController {
        &self.effects
    }

    pub fn drop_schedule(&self) -> &DropSchedule {
        &self.drops
    }

    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    pub fn bullet_count(&self) -> usize {
        self.world.query::<&Bullet>().iter().count()
    }

    pub fn power_up_count(&self) -> usize {
        self.world.query::<&PowerUp>().iter().count()
    }

    /// Spawn an asteroid with an explicit pose (for tests).
    #[cfg(test)]
    pub fn spawn_test_asteroid(
        &mut self,
        tier: destroyer_core::enums::AsteroidTier,
        position: destroyer_core::types::Position,
        velocity: destroyer_core::types::Velocity,
    ) -> hecs::Entity {
        world_setup::spawn_asteroid(&mut self.world, &mut self.sequence, tier, position, velocity)
    }

    /// Spawn a power-up at `position` (for tests).
    #[cfg(test)]
    pub fn spawn_test_power_up(
        &mut self,
        kind: destroyer_core::enums::PowerUpKind,
        position: destroyer_core::types::Position,
    ) -> hecs::Entity {
        world_setup::spawn_power_up(&mut self.world, &mut self.sequence, kind, position)
    }

    /// Spawn a bullet with an explicit pose (for tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(
        &mut self,
        position: destroyer_core::types::Position,
        velocity: destroyer_core::types::Velocity,
    ) -> hecs::Entity {
        world_setup::spawn_bullet(&mut self.world, &mut self.sequence, position, velocity)
    }

    /// Remove every asteroid (for tests).
    #[cfg(test)]
    pub fn clear_asteroids(&mut self) {
        let asteroids: Vec<hecs::Entity> = self
            .world
            .query::<&Asteroid>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in asteroids {
            let _ = self.world.despawn(entity);
        }
    }

    /// Put the ship at rest at `position` facing `heading` (for tests).
    #[cfg(test)]
    pub fn place_ship(&mut self, position: destroyer_core::types::Position, heading: f64) {
        use destroyer_core::components::Ship;
        use destroyer_core::types::{Position, Velocity};

        for (_entity, (ship, pos, vel)) in self
            .world
            .query_mut::<(&mut Ship, &mut Position, &mut Velocity)>()
        {
            ship.heading = heading;
            *pos = position;
            *vel = Velocity::default();
        }
    }

    #[cfg(test)]
    pub fn effects_mut(&mut self) -> &mut EffectController {
        &mut self.effects
    }

    #[cfg(test)]
    pub fn drop_schedule_mut(&mut self) -> &mut DropSchedule {
        &mut self.drops
    }
}

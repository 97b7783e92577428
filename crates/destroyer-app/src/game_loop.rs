//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built by the caller (construction can fail on bad rules) and
//! moved into this thread. Commands arrive via an `mpsc` channel and are folded
//! into per-tick intents by an [`InputLatch`]. Snapshots are stored in shared
//! state for polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::{debug, info};

use destroyer_core::commands::PlayerCommand;
use destroyer_core::constants::TICK_RATE;
use destroyer_core::enums::RunPhase;
use destroyer_core::state::GameStateSnapshot;
use destroyer_sim::engine::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::input::InputLatch;
use crate::state::{new_shared_snapshot, GameLoopCommand, LoopHandle};

/// Duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Drives one engine: applies latched input (or the autopilot), honours
/// restart requests after game over, and steps.
pub struct Driver {
    engine: SimulationEngine,
    latch: InputLatch,
    autopilot: Option<Autopilot>,
    last: GameStateSnapshot,
}

impl Driver {
    pub fn new(engine: SimulationEngine, autopilot: Option<Autopilot>) -> Self {
        let last = engine.snapshot();
        Self {
            engine,
            latch: InputLatch::new(),
            autopilot,
            last,
        }
    }

    pub fn handle(&mut self, command: PlayerCommand) {
        self.latch.apply(command);
    }

    /// Advance one tick and return the new snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        // Restart is only meaningful once the run is over.
        if self.latch.take_restart() && self.engine.phase() == RunPhase::GameOver {
            info!("restarting after game over");
            self.engine.restart();
        }

        let held = self.latch.take_intents();
        let intents = match &self.autopilot {
            Some(pilot) => pilot.next_intents(&self.last),
            None => held,
        };

        self.last = self.engine.tick(&intents);
        self.last.clone()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn last_snapshot(&self) -> &GameStateSnapshot {
        &self.last
    }
}

/// Step as fast as possible for up to `max_ticks`, stopping early on game over.
pub fn run_unpaced(driver: &mut Driver, max_ticks: u64) -> GameStateSnapshot {
    for _ in 0..max_ticks {
        let snapshot = driver.tick();
        if snapshot.phase == RunPhase::GameOver {
            break;
        }
    }
    driver.last_snapshot().clone()
}

/// Spawns the game loop in a new thread.
///
/// The loop stops after `max_ticks` ticks if given, on a Shutdown command,
/// or when every sender is dropped.
pub fn spawn_game_loop(driver: Driver, max_ticks: Option<u64>) -> std::io::Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = new_shared_snapshot();
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("destroyer-game-loop".into())
        .spawn(move || {
            run_game_loop(driver, cmd_rx, &shared, max_ticks);
        })?;

    Ok(LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or the tick limit.
fn run_game_loop(
    mut driver: Driver,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    max_ticks: Option<u64>,
) {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => driver.handle(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = driver.tick();
        ticks += 1;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|limit| ticks >= limit) {
            debug!("tick limit {ticks} reached");
            return;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destroyer_core::commands::Control;
    use destroyer_core::config::GameRules;
    use destroyer_sim::engine::SimConfig;

    fn driver(autopilot: Option<Autopilot>) -> Driver {
        Driver::new(SimulationEngine::new(SimConfig::default()).unwrap(), autopilot)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Restart))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Fire)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Restart)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut driver = driver(None);
        for _ in 0..50 {
            driver.tick();
        }

        let snapshot = driver.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_fire_command_reaches_the_engine() {
        let mut driver = driver(None);
        driver.handle(PlayerCommand::Fire);
        let snap = driver.tick();
        assert_eq!(snap.bullets.len(), 1);

        // Consumed; the next tick does not fire again.
        let snap = driver.tick();
        assert_eq!(snap.bullets.len(), 1);
    }

    #[test]
    fn test_held_thrust_reaches_the_engine() {
        let mut driver = driver(None);
        driver.handle(PlayerCommand::Press {
            control: Control::Thrust,
        });
        let snap = driver.tick();
        assert!(snap.ship.thrusting);
        assert!(snap.ship.velocity.speed() > 0.0);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut driver = driver(None);
        for _ in 0..10 {
            driver.tick();
        }
        driver.handle(PlayerCommand::Restart);
        let snap = driver.tick();
        assert_eq!(snap.time.tick, 11);
        assert_eq!(snap.phase, RunPhase::Running);
    }

    #[test]
    fn test_restart_honoured_after_game_over() {
        // An oversized ship gets hit quickly, but not on the first tick.
        let engine = SimulationEngine::new(SimConfig {
            seed: 42,
            rules: GameRules {
                ship_size: 400.0,
                ..Default::default()
            },
        })
        .unwrap();
        let mut driver = Driver::new(engine, None);
        let mut over = false;
        for _ in 0..20_000 {
            if driver.tick().phase == RunPhase::GameOver {
                over = true;
                break;
            }
        }
        assert!(over, "an oversized idle ship should be hit");

        driver.handle(PlayerCommand::Restart);
        let snap = driver.tick();
        assert_eq!(snap.phase, RunPhase::Running);
        assert_eq!(snap.time.tick, 1);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_autopilot_scores() {
        let best = (1..=5)
            .map(|seed| {
                let engine = SimulationEngine::new(SimConfig {
                    seed,
                    ..Default::default()
                })
                .unwrap();
                let pilot = Autopilot::for_rules(engine.rules());
                let mut driver = Driver::new(engine, Some(pilot));
                run_unpaced(&mut driver, 3_000).score
            })
            .max()
            .unwrap();
        assert!(best > 0, "autopilot never hit anything");
    }

    #[test]
    fn test_loop_thread_stops_at_tick_limit() {
        let handle = spawn_game_loop(driver(None), Some(3)).unwrap();
        let latest = handle.latest_snapshot.clone();
        handle.shutdown().unwrap();

        let snap = latest.lock().unwrap().clone();
        // Shutdown may win the race before the limit; any tick is fine.
        assert!(snap.map_or(true, |s| s.time.tick <= 3));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}

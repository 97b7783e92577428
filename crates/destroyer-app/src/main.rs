use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use destroyer_app::autopilot::Autopilot;
use destroyer_app::game_loop::{self, Driver, TICK_DURATION};
use destroyer_core::config::GameRules;
use destroyer_core::state::GameStateSnapshot;
use destroyer_sim::engine::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "destroyer")]
#[command(about = "Headless Asteroid Destroyer run flown by the autopilot")]
struct Cli {
    /// RNG seed; the same seed and rules replay the same run
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// TOML file overriding the default game rules
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of ticks to run
    #[arg(long, default_value_t = 3_600)]
    ticks: u64,
    /// Drive through the 60 Hz game loop thread instead of stepping flat out
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(snapshot) => {
            info!(
                "finished at tick {} ({:?}), score {}",
                snapshot.time.tick, snapshot.phase, snapshot.score
            );
            if cli.json {
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!("failed to encode snapshot: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GameStateSnapshot, String> {
    let rules = match &cli.config {
        Some(path) => GameRules::load(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => GameRules::default(),
    };
    let engine = SimulationEngine::new(SimConfig {
        seed: cli.seed,
        rules,
    })
    .map_err(|e| e.to_string())?;
    let pilot = Autopilot::for_rules(engine.rules());
    let mut driver = Driver::new(engine, Some(pilot));

    if !cli.realtime {
        return Ok(game_loop::run_unpaced(&mut driver, cli.ticks));
    }

    let handle = game_loop::spawn_game_loop(driver, Some(cli.ticks)).map_err(|e| e.to_string())?;
    // The loop exits on its own at the tick limit; poll until it does.
    while !handle.thread.is_finished() {
        std::thread::sleep(TICK_DURATION * 30);
        if let Some(snapshot) = handle.snapshot()? {
            debug!("tick {} score {}", snapshot.time.tick, snapshot.score);
        }
    }
    let latest = handle.snapshot()?;
    handle.shutdown()?;
    latest.ok_or_else(|| "game loop produced no snapshot".to_string())
}

//! Simulation engine for Asteroid Destroyer.
//!
//! Owns the hecs ECS world, advances it one fixed tick at a time,
//! and produces GameStateSnapshots for the renderer.

pub mod effects;
pub mod engine;
pub mod field;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use destroyer_core as core;
pub use engine::{SimConfig, SimulationEngine};

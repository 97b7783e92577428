//! Asteroid Destroyer headless driver.
//!
//! Wires the simulation engine to an input latch, an optional autopilot and
//! a fixed-rate game loop thread.

pub mod autopilot;
pub mod game_loop;
pub mod input;
pub mod state;

pub use destroyer_core as core;

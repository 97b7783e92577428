//! Core types and definitions for the Asteroid Destroyer simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, rules, state snapshots, events, and constants.
//! It has no dependency on the ECS runtime or any windowing framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod display;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

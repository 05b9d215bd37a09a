//! Simulation engine for the flappy game.
//!
//! Owns the game state snapshots, runs systems at a fixed tick rate,
//! and exposes the committed state for presentation layers to pull.

pub mod engine;
pub mod systems;

pub use engine::SimulationEngine;
pub use flappy_core as core;

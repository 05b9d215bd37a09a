//! Headless driver for the flappy simulation.
//!
//! Wires the engine to input sources (scripted autopilot or channel commands)
//! and runs it either as fast as possible or on a fixed-rate thread.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod presenter;
pub mod state;

pub use flappy_core as core;

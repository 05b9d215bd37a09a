//! Core types and definitions for the flappy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, state snapshots, configuration, commands, events and errors.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use error::ConfigError;
pub use state::GameState;

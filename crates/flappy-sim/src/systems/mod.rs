//! Systems that transform the game state each tick.
//!
//! Systems are pure functions (or hold only their own counters). They never
//! edit a snapshot in place; each returns new values for the engine to commit.

pub mod cleanup;
pub mod game_over;
pub mod movement;
pub mod pipe_spawner;
pub mod scoring;

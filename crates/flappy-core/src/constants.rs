//! Default tuning parameters.
//!
//! The integration constants assume a ~60 Hz tick source, but the simulation
//! itself has no wall-clock dependency.

/// Nominal tick rate of the driving loop (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

pub const SCREEN_WIDTH: u32 = 600;
pub const SCREEN_HEIGHT: u32 = 800;

/// Height of the ground strip at the bottom of the screen.
pub const GROUND_HEIGHT: u32 = 128;

// --- Bird ---

pub const BIRD_WIDTH: f64 = 92.0;
pub const BIRD_HEIGHT: f64 = 64.0;

/// Gravity, in units per tick².
pub const BIRD_AY: f64 = 0.5;

/// Vertical velocity set by a jump (negative = up).
pub const JUMP_VY: f64 = -12.0;

/// Radius of the circular hit area used for pipe collisions.
pub const BIRD_RADIUS: f64 = 35.0;

// --- Pipes ---

pub const PIPE_WIDTH: u32 = 138;

/// Horizontal pipe velocity (units/tick).
pub const PIPE_VX: f64 = -3.0;

/// Seconds between pipe spawns at the nominal tick rate.
pub const SECONDS_PER_GENERATION: u32 = 2;

/// Ticks between pipe spawns.
pub const TICKS_PER_GENERATION: u64 = (TICK_RATE * SECONDS_PER_GENERATION) as u64;

/// Vertical gap between the top and bottom pipe.
pub const HOLE_HEIGHT: u32 = 230;

/// Minimum height of either pipe segment.
pub const MIN_PIPE_HEIGHT: u32 = 100;

// --- Randomness ---

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

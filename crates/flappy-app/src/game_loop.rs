//! Game loop thread: runs the presenter at a fixed rate and publishes snapshots.
//!
//! The presenter is moved into this thread, which then owns it. Commands arrive
//! via an `mpsc` channel. Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use flappy_core::config::GameConfig;
use flappy_core::constants::TICK_RATE;
use flappy_core::state::GameState;

use crate::autopilot::Autopilot;
use crate::error::AppError;
use crate::presenter::Presenter;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at the default rate.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Duration of one tick at `tick_rate` ticks per second. Zero is treated as one.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Final state of a stopped game loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopExit {
    pub state: GameState,
    pub game_over: bool,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the final state once
/// the loop stops.
pub fn spawn_game_loop(
    config: GameConfig,
    tick_rate: u32,
    autopilot: Option<Autopilot>,
    latest_snapshot: Arc<Mutex<Option<GameState>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopExit>), AppError> {
    let presenter = Presenter::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("flappy-game-loop".into())
        .spawn(move || {
            run_game_loop(
                presenter,
                tick_duration(tick_rate),
                autopilot,
                cmd_rx,
                &latest_snapshot,
            )
        })
        .map_err(AppError::SpawnThread)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut presenter: Presenter,
    tick_duration: Duration,
    autopilot: Option<Autopilot>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameState>>,
) -> LoopExit {
    info!(?tick_duration, autopilot = autopilot.is_some(), "game loop started");
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => presenter.handle_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!(tick = presenter.state().tick_count, "game loop stopping");
                    return LoopExit {
                        state: presenter.state().clone(),
                        game_over: presenter.engine().is_game_over(),
                    };
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Scripted input, if any
        if let Some(pilot) = &autopilot {
            if presenter.is_paused() || pilot.should_jump(presenter.state()) {
                presenter.handle_jump();
            }
        }

        // 3. Advance one tick (the presenter pauses once the game is over)
        presenter.handle_tick();

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(presenter.state().clone());
        }

        // 5. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

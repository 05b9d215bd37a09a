use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use flappy_app::autopilot::Autopilot;
use flappy_app::config::resolve_config;
use flappy_app::error::AppError;
use flappy_app::game_loop::spawn_game_loop;
use flappy_app::presenter::{Presenter, TickOutcome};
use flappy_app::state::{AppState, GameLoopCommand};
use flappy_core::config::GameConfig;
use flappy_core::constants::TICK_RATE;
use flappy_core::state::GameState;

#[derive(Parser, Debug)]
#[command(name = "flappy")]
#[command(about = "Headless driver for the deterministic flappy simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a fixed number of ticks as fast as possible
    Run {
        #[arg(long, default_value_t = 1_000)]
        ticks: u64,
        /// Let the bird fall instead of flying it with the autopilot
        #[arg(long)]
        no_autopilot: bool,
        /// Print every snapshot as a JSON line
        #[arg(long)]
        json: bool,
        /// JSON config file; missing fields use defaults
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Drive the game loop thread in real time
    Realtime {
        #[arg(long, default_value_t = 5.0)]
        seconds: f64,
        #[arg(long, default_value_t = TICK_RATE)]
        tick_rate: u32,
        #[arg(long)]
        no_autopilot: bool,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as JSON
    Config,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    ticks: u64,
    score: u32,
    game_over: bool,
}

impl RunSummary {
    fn from_state(state: &GameState, game_over: bool) -> Self {
        Self {
            ticks: state.tick_count,
            score: state.score,
            game_over,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!("=== RESULT ===");
            println!("  Ticks:      {}", self.ticks);
            println!("  Score:      {}", self.score);
            println!("  Game over:  {}", self.game_over);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            ticks,
            no_autopilot,
            json,
            config,
            seed,
        } => {
            let config = resolve_config(config.as_deref(), seed)?;
            run_headless(config, ticks, !no_autopilot, json)
        }
        Commands::Realtime {
            seconds,
            tick_rate,
            no_autopilot,
            config,
            seed,
        } => {
            let config = resolve_config(config.as_deref(), seed)?;
            run_realtime(config, seconds, tick_rate, !no_autopilot)
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&GameConfig::default())?);
            Ok(())
        }
    }
}

fn run_headless(config: GameConfig, ticks: u64, autopilot: bool, json: bool) -> Result<()> {
    let pilot = autopilot.then(|| Autopilot::new(config.bird_radius));
    let mut presenter = Presenter::new(config)?;
    info!(ticks, autopilot, "running headless");

    for _ in 0..ticks {
        if let Some(pilot) = &pilot {
            if pilot.should_jump(presenter.state()) {
                presenter.handle_jump();
            }
        }
        if presenter.handle_tick() == TickOutcome::Paused {
            break;
        }
        for event in presenter.engine_mut().drain_events() {
            debug!(?event, "game event");
        }
        if json {
            println!("{}", serde_json::to_string(presenter.state())?);
        }
    }

    let game_over = presenter.engine().is_game_over();
    RunSummary::from_state(presenter.state(), game_over).print(json)
}

fn run_realtime(config: GameConfig, seconds: f64, tick_rate: u32, autopilot: bool) -> Result<()> {
    let app = AppState::new();
    let pilot = autopilot.then(|| Autopilot::new(config.bird_radius));
    let (tx, handle) = spawn_game_loop(config, tick_rate, pilot, Arc::clone(&app.latest_snapshot))?;
    if let Ok(mut lock) = app.command_tx.lock() {
        *lock = Some(tx);
    }

    let deadline = Duration::try_from_secs_f64(seconds)
        .map_err(|e| anyhow!("invalid duration {seconds}: {e}"))?;
    let mut elapsed = Duration::ZERO;
    while elapsed < deadline {
        let step = Duration::from_secs(1).min(deadline - elapsed);
        std::thread::sleep(step);
        elapsed += step;
        if let Some(snapshot) = app.snapshot() {
            info!(
                tick = snapshot.tick_count,
                score = snapshot.score,
                bird_y = snapshot.bird.y,
                "progress"
            );
        }
    }

    let tx = app
        .command_tx
        .lock()
        .ok()
        .and_then(|mut lock| lock.take())
        .ok_or(AppError::LoopNotRunning)?;
    tx.send(GameLoopCommand::Shutdown)
        .map_err(|_| AppError::LoopNotRunning)?;
    let last = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    RunSummary::from_state(&last.state, last.game_over).print(false)
}

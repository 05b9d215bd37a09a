//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the current and previous snapshots, processes
//! player commands, runs all systems, and exposes the committed state for
//! readers to pull. Completely headless, enabling deterministic testing.
//!
//! Per tick, while running: spawn → move → score → prune → commit. Once the
//! game-over check fires the engine turns terminal and only the tick counter
//! keeps advancing until a reset.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use flappy_core::commands::PlayerCommand;
use flappy_core::config::GameConfig;
use flappy_core::enums::GamePhase;
use flappy_core::error::ConfigError;
use flappy_core::events::GameEvent;
use flappy_core::state::GameState;

use crate::systems::game_over::GameOverDecider;
use crate::systems::pipe_spawner::PipeGenerator;
use crate::systems::scoring::ScoreTracker;
use crate::systems::{cleanup, movement};

/// The simulation engine. Owns both retained snapshots and all sim state.
#[derive(Debug)]
pub struct SimulationEngine {
    config: GameConfig,
    current: GameState,
    /// Snapshot committed by the previous tick; scoring compares against it.
    previous: GameState,
    phase: GamePhase,
    rng: ChaCha8Rng,
    pipe_generator: PipeGenerator,
    game_over: GameOverDecider,
    score: ScoreTracker,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine with the default game-over detectors.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let decider = GameOverDecider::new(config.bird_radius);
        Self::with_decider(config, decider)
    }

    /// Create an engine with a custom set of game-over detectors.
    pub fn with_decider(config: GameConfig, game_over: GameOverDecider) -> Result<Self, ConfigError> {
        config.validate()?;

        let initial = GameState::initial(&config);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            pipe_generator: PipeGenerator::from_config(&config),
            previous: initial.clone(),
            current: initial,
            phase: GamePhase::Running,
            game_over,
            score: ScoreTracker::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Jump => self.jump(),
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Advance the simulation by one tick and return the new snapshot.
    ///
    /// The tick counter advances even while terminal; nothing else does.
    pub fn tick(&mut self) -> &GameState {
        self.process_commands();

        let committed = if self.phase == GamePhase::Running && !self.is_game_over() {
            self.advance()
        } else {
            self.enter_terminal();
            self.current.clone()
        };

        let tick_count = committed.tick_count + 1;
        self.current = committed.clone().with_tick_count(tick_count);
        self.previous = committed;

        trace!(tick = tick_count, phase = ?self.phase, "tick complete");
        &self.current
    }

    /// Give the bird its jump velocity. Ignored once the game is over.
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Terminal || self.is_game_over() {
            debug!(tick = self.current.tick_count, "jump ignored, game is over");
            return;
        }
        let bird = self.current.bird.with_vy(self.config.jump_vy);
        self.current = self.current.with_bird(bird);
    }

    /// Rebuild the initial game from the engine configuration.
    ///
    /// Allowed in any phase; a reset while running discards the game in
    /// progress exactly like a reset after game over.
    pub fn reset(&mut self) {
        debug!(
            tick = self.current.tick_count,
            score = self.score.score(),
            phase = ?self.phase,
            "resetting game"
        );
        let initial = GameState::initial(&self.config);
        self.previous = initial.clone();
        self.current = initial;
        self.phase = GamePhase::Running;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.score.reset();
        self.events.clear();
    }

    /// Re-evaluate the game-over detectors against the current snapshot.
    /// Pure: does not change the phase.
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_game_over(&self.current)
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// The snapshot committed by the previous tick.
    pub fn previous_state(&self) -> &GameState {
        &self.previous
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.current.tick_count
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the current snapshot (for tests that need a specific layout).
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: GameState) {
        self.current = state;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    /// Run all systems in order and return the snapshot to commit.
    fn advance(&mut self) -> GameState {
        let tick_count = self.current.tick_count;

        // 1. Pipe spawning (before movement, so tick 0 already has a pipe)
        let mut pipe_pairs = self.current.pipe_pairs.clone();
        if let Some(pair) = self.pipe_generator.run(tick_count, &self.current, &mut self.rng) {
            self.events.push(GameEvent::PipeSpawned {
                spawn_tick: pair.spawn_tick,
                top_height: pair.top_height,
                bottom_height: pair.bottom_height,
            });
            pipe_pairs.push(pair);
        }
        let spawned = self.current.clone().with_pipe_pairs(pipe_pairs);

        // 2. Movement integration
        let moved = movement::run(&spawned);

        // 3. Scoring against the last committed snapshot
        let cleared = self.score.update(&self.previous, &moved);
        let score_before = self.score.score() - cleared.len() as u32;
        for (n, spawn_tick) in (1..).zip(cleared) {
            self.events.push(GameEvent::PipeCleared {
                spawn_tick,
                score: score_before + n,
            });
        }

        // 4. Cleanup
        let pruned = cleanup::run(&moved.pipe_pairs);
        moved.with_pipe_pairs(pruned).with_score(self.score.score())
    }

    fn enter_terminal(&mut self) {
        if self.phase == GamePhase::Terminal {
            return;
        }
        self.phase = GamePhase::Terminal;
        info!(
            tick = self.current.tick_count,
            score = self.score.score(),
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            tick: self.current.tick_count,
            score: self.score.score(),
        });
    }
}

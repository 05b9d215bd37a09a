//! Presenter rules between an input source and the engine.
//!
//! Ticks stop once the game is over; the next jump starts a fresh game.

use tracing::{debug, info};

use flappy_core::commands::PlayerCommand;
use flappy_core::config::GameConfig;
use flappy_core::error::ConfigError;
use flappy_core::state::GameState;
use flappy_sim::SimulationEngine;

/// Result of a tick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine advanced one tick.
    Advanced,
    /// The game is over; the engine was not ticked.
    Paused,
}

#[derive(Debug)]
pub struct Presenter {
    engine: SimulationEngine,
    paused: bool,
}

impl Presenter {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(SimulationEngine::new(config)?))
    }

    pub fn from_engine(engine: SimulationEngine) -> Self {
        Self {
            engine,
            paused: false,
        }
    }

    /// Tick the engine unless the game is over, in which case pause instead.
    pub fn handle_tick(&mut self) -> TickOutcome {
        if self.engine.is_game_over() {
            if !self.paused {
                info!(
                    tick = self.engine.tick_count(),
                    score = self.engine.score(),
                    "game over, pausing"
                );
            }
            self.paused = true;
            return TickOutcome::Paused;
        }
        self.engine.tick();
        TickOutcome::Advanced
    }

    /// Jump, or restart if the game is over.
    pub fn handle_jump(&mut self) {
        if self.engine.is_game_over() {
            debug!(score = self.engine.score(), "restarting after game over");
            self.engine.reset();
            self.paused = false;
        } else {
            self.engine.jump();
        }
    }

    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Jump => self.handle_jump(),
            PlayerCommand::Reset => {
                self.engine.reset();
                self.paused = false;
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crash(presenter: &mut Presenter) -> u32 {
        let mut ticks = 0;
        while presenter.handle_tick() == TickOutcome::Advanced {
            ticks += 1;
            assert!(ticks < 1_000, "bird never hit the ground");
        }
        ticks
    }

    #[test]
    fn test_tick_advances_while_alive() {
        let mut presenter = Presenter::new(GameConfig::default()).unwrap();
        assert_eq!(presenter.handle_tick(), TickOutcome::Advanced);
        assert_eq!(presenter.state().tick_count, 1);
        assert!(!presenter.is_paused());
    }

    #[test]
    fn test_game_over_pauses_without_ticking() {
        let mut presenter = Presenter::new(GameConfig::default()).unwrap();
        crash(&mut presenter);
        assert!(presenter.is_paused());

        let frozen = presenter.state().clone();
        assert_eq!(presenter.handle_tick(), TickOutcome::Paused);
        assert_eq!(presenter.state(), &frozen);
    }

    #[test]
    fn test_jump_after_game_over_restarts() {
        let config = GameConfig::default();
        let mut presenter = Presenter::new(config.clone()).unwrap();
        crash(&mut presenter);

        presenter.handle_jump();
        assert!(!presenter.is_paused());
        assert_eq!(presenter.state(), &GameState::initial(&config));
        assert_eq!(presenter.handle_tick(), TickOutcome::Advanced);
    }

    #[test]
    fn test_jump_while_alive_sets_velocity() {
        let config = GameConfig::default();
        let mut presenter = Presenter::new(config.clone()).unwrap();
        presenter.handle_jump();
        assert_eq!(presenter.state().bird.vy, config.jump_vy);
    }

    #[test]
    fn test_reset_command_unpauses() {
        let config = GameConfig::default();
        let mut presenter = Presenter::new(config.clone()).unwrap();
        crash(&mut presenter);

        presenter.handle_command(PlayerCommand::Reset);
        assert!(!presenter.is_paused());
        assert_eq!(presenter.state(), &GameState::initial(&config));
    }
}

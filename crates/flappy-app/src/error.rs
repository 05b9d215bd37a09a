//! Errors surfaced by the headless driver.

use std::path::PathBuf;

use flappy_core::error::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn game loop thread: {0}")]
    SpawnThread(#[source] std::io::Error),

    #[error("game loop is not running")]
    LoopNotRunning,
}

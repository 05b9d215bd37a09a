//! Loading game configuration from disk.

use std::fs;
use std::path::Path;

use flappy_core::config::GameConfig;

use crate::error::AppError;

/// Read a JSON config file. Fields missing from the file keep their defaults.
/// The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<GameConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GameConfig =
        serde_json::from_str(&text).map_err(|source| AppError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Load `path` if given, else the defaults, then apply a seed override.
pub fn resolve_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig, AppError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

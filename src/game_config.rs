//! Game configuration for the memory challenge.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Validated parameters for a memory challenge.
///
/// Every construction path validates, including deserialization, so a
/// `GameConfig` in hand is always playable.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFile")]
pub struct GameConfig {
    /// Cells per side of the square grid.
    grid_size: usize,

    /// Number of cells to memorize (clamped to the grid).
    challenge_size: usize,

    /// Seconds the challenge cells stay visible.
    challenge_seconds: u64,

    /// Seconds on the countdown once picking starts.
    play_seconds: u32,

    /// Wrong picks that end the game.
    max_wrong_attempts: usize,
}

/// On-disk shape of [`GameConfig`], before validation.
#[derive(Debug, Clone, Deserialize)]
struct GameConfigFile {
    #[serde(default = "default_grid_size")]
    grid_size: usize,
    #[serde(default = "default_challenge_size")]
    challenge_size: usize,
    #[serde(default = "default_challenge_seconds")]
    challenge_seconds: u64,
    #[serde(default = "default_play_seconds")]
    play_seconds: u32,
    #[serde(default = "default_max_wrong_attempts")]
    max_wrong_attempts: usize,
}

fn default_grid_size() -> usize {
    5
}

fn default_challenge_size() -> usize {
    6
}

fn default_challenge_seconds() -> u64 {
    3
}

fn default_play_seconds() -> u32 {
    10
}

fn default_max_wrong_attempts() -> usize {
    3
}

impl TryFrom<GameConfigFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: GameConfigFile) -> Result<Self, Self::Error> {
        GameConfig::new(
            file.grid_size,
            file.challenge_size,
            file.challenge_seconds,
            file.play_seconds,
            file.max_wrong_attempts,
        )
    }
}

impl GameConfig {
    /// Creates a configuration, rejecting values no game can be played with.
    #[track_caller]
    #[instrument]
    pub fn new(
        grid_size: usize,
        challenge_size: usize,
        challenge_seconds: u64,
        play_seconds: u32,
        max_wrong_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::new("grid_size must be at least 1".to_string()));
        }
        if grid_size.checked_mul(grid_size).is_none() {
            return Err(ConfigError::new(format!(
                "grid_size {} overflows the cell count",
                grid_size
            )));
        }
        if challenge_size == 0 {
            return Err(ConfigError::new(
                "challenge_size must be at least 1".to_string(),
            ));
        }
        if play_seconds == 0 {
            return Err(ConfigError::new("play_seconds must be at least 1".to_string()));
        }
        if max_wrong_attempts == 0 {
            return Err(ConfigError::new(
                "max_wrong_attempts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            grid_size,
            challenge_size,
            challenge_seconds,
            play_seconds,
            max_wrong_attempts,
        })
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Size of the challenge set actually drawn, after clamping to the grid.
    pub fn effective_challenge_size(&self) -> usize {
        self.challenge_size.min(self.cell_count())
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed game config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            grid_size = config.grid_size,
            challenge_size = config.challenge_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            challenge_size: default_challenge_size(),
            challenge_seconds: default_challenge_seconds(),
            play_seconds: default_play_seconds(),
            max_wrong_attempts: default_max_wrong_attempts(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(*config.grid_size(), 5);
        assert_eq!(config.cell_count(), 25);
        assert_eq!(*config.challenge_size(), 6);
        assert_eq!(*config.challenge_seconds(), 3);
        assert_eq!(*config.play_seconds(), 10);
        assert_eq!(*config.max_wrong_attempts(), 3);
    }

    #[test]
    fn test_rejects_unplayable_values() {
        assert!(GameConfig::new(0, 6, 3, 10, 3).is_err());
        assert!(GameConfig::new(5, 0, 3, 10, 3).is_err());
        assert!(GameConfig::new(5, 6, 3, 0, 3).is_err());
        assert!(GameConfig::new(5, 6, 3, 10, 0).is_err());
        assert!(GameConfig::new(usize::MAX, 6, 3, 10, 3).is_err());
    }

    #[test]
    fn test_zero_challenge_seconds_is_allowed() {
        assert!(GameConfig::new(5, 6, 0, 10, 3).is_ok());
    }

    #[test]
    fn test_challenge_size_clamps_to_grid() {
        let config = GameConfig::new(2, 9, 3, 10, 3).unwrap();
        assert_eq!(config.effective_challenge_size(), 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("grid_size = 4\nplay_seconds = 20\n").unwrap();
        assert_eq!(*config.grid_size(), 4);
        assert_eq!(*config.play_seconds(), 20);
        assert_eq!(*config.challenge_size(), 6);
    }

    #[test]
    fn test_invalid_toml_values_are_rejected() {
        let err = GameConfig::from_toml_str("grid_size = 0\n").unwrap_err();
        assert!(err.message.contains("grid_size"), "{}", err);
    }

    #[test]
    fn test_error_records_caller_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("game_config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::new(3, 2, 1, 5, 2).unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}

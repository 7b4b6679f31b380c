//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use emoji_tictactoe::{Game, Player, StartPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "emoji_tictactoe.toml";

/// Who opens each round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The cat always opens.
    Cat,
    /// The dog always opens.
    Dog,
    /// Coin flip on every reset; the very first round opens with the cat.
    #[default]
    Random,
}

impl From<FirstPlayer> for StartPolicy {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Cat => StartPolicy::Fixed(Player::Cat),
            FirstPlayer::Dog => StartPolicy::Fixed(Player::Dog),
            FirstPlayer::Random => StartPolicy::Random,
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Start policy for each round.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the first-player coin flip. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// File that receives log output.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file, or [`DEFAULT_CONFIG_FILE`] if present, or
    /// falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_player: Option<FirstPlayer>, seed: Option<u64>) -> Self {
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The engine start policy.
    pub fn start_policy(&self) -> StartPolicy {
        self.first_player.into()
    }

    /// Builds the first round. Interactive play and replay both start here,
    /// so a random policy opens with the cat and the seed only drives resets.
    pub fn new_game(&self) -> Game {
        Game::new(self.start_policy())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Game configuration: player names, mark assignment, and who starts.

use crate::types::{Mark, Player, Seat};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which seat takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Random`], a fair coin flip per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Flip a coin at every reset.
    #[default]
    Random,
    /// The human always starts.
    Human,
    /// The computer always starts.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }

    /// Resolves this setting to a seat, flipping a coin for `Random`.
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> Seat {
        match self {
            Self::Random => {
                if rng.gen_bool(0.5) {
                    Seat::Human
                } else {
                    Seat::Computer
                }
            }
            Self::Human => Seat::Human,
            Self::Computer => Seat::Computer,
        }
    }
}

/// Configuration for a game engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the human participant.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Display name of the automated participant.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Mark placed by the human; the computer plays the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Who starts each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the starting-player coin flip. `None` draws from entropy.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_human_mark() -> Mark {
    Mark::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            computer_name: default_computer_name(),
            human_mark: default_human_mark(),
            first_player: FirstPlayer::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(human = %config.human_name, computer = %config.computer_name, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that both names are non-blank and distinct.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_name.trim().is_empty() {
            return Err(ConfigError::new("human_name must not be empty".to_string()));
        }
        if self.computer_name.trim().is_empty() {
            return Err(ConfigError::new(
                "computer_name must not be empty".to_string(),
            ));
        }
        if self.human_name == self.computer_name {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                self.human_name
            )));
        }
        Ok(())
    }

    /// Overrides who starts.
    #[must_use]
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the coin-flip seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the human's mark.
    #[must_use]
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Overrides both display names.
    #[must_use]
    pub fn with_names(mut self, human: impl Into<String>, computer: impl Into<String>) -> Self {
        self.human_name = human.into();
        self.computer_name = computer.into();
        self
    }

    /// Mark placed by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Builds the human player.
    pub fn human_player(&self) -> Player {
        Player::new(Seat::Human, self.human_name.clone(), self.human_mark)
    }

    /// Builds the computer player.
    pub fn computer_player(&self) -> Player {
        Player::new(Seat::Computer, self.computer_name.clone(), self.computer_mark())
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

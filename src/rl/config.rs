//! Agent environment configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::game::GameConfig;

/// Configuration for [`SnakeEnvironment`](super::SnakeEnvironment)
///
/// Holds the game setup plus the reward shaping handed to the agent.
///
/// # Example
///
/// ```rust
/// use snake_env::rl::EnvConfig;
///
/// let config = EnvConfig {
///     death_penalty: -5.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Board size, seed and scoring of the wrapped game
    pub game: GameConfig,

    /// Reward for eating food
    ///
    /// Default: 10.0
    pub food_reward: f32,

    /// Reward added on every surviving step (usually negative)
    ///
    /// Default: -0.01
    pub step_penalty: f32,

    /// Reward for hitting a wall or the body
    ///
    /// Default: -10.0
    pub death_penalty: f32,

    /// Reward for covering the whole board
    ///
    /// Default: 100.0
    pub victory_reward: f32,

    /// Steps without food before an episode is truncated.
    ///
    /// `None` means four times the number of cells.
    pub max_steps_without_food: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            food_reward: 10.0,
            step_penalty: -0.01,
            death_penalty: -10.0,
            victory_reward: 100.0,
            max_steps_without_food: None,
        }
    }
}

impl EnvConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Default::default()
        }
    }

    /// Effective truncation limit
    pub fn step_limit(&self) -> usize {
        self.max_steps_without_food
            .unwrap_or(self.game.grid_size() * 4)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.game.validate()?;

        let rewards = [
            ("food_reward", self.food_reward),
            ("step_penalty", self.step_penalty),
            ("death_penalty", self.death_penalty),
            ("victory_reward", self.victory_reward),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigurationError::InvalidReward { name, value });
            }
        }

        if self.max_steps_without_food == Some(0) {
            return Err(ConfigurationError::InvalidEpisodeLimit);
        }

        Ok(())
    }
}

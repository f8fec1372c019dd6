use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Smallest board that fits the starting 3-cell snake
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board accepted; keeps coordinates and the cell count well inside `i32`
pub const MAX_BOARD_SIZE: usize = 4096;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Seed for the food placement generator
    pub seed: u64,
    /// Score added for each food eaten
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 12,
            seed: 0,
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom seed and board size
    pub fn new(seed: u64, board_size: usize) -> Self {
        Self {
            board_size,
            seed,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(0, 6)
    }

    /// Total number of cells on the board
    pub fn grid_size(&self) -> usize {
        self.board_size * self.board_size
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigurationError::BoardTooSmall {
                board_size: self.board_size,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigurationError::BoardTooLarge {
                board_size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }

    /// Read a JSON configuration without validating it, so callers can
    /// apply overrides first. Missing fields take defaults.
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read game config from {:?}", path))?;
        serde_json::from_str(&json).context("Failed to parse game config")
    }

    /// Read and validate a JSON configuration
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }
}

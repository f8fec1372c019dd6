//! Agent-facing environment for the Snake game
//!
//! Provides:
//! - 4-channel grid observations (head, body, food, walls)
//! - Discrete action space with a validity mask
//! - Reward shaping and episode truncation

pub mod config;
pub mod environment;
pub mod observation;

pub use config::EnvConfig;
pub use environment::{ACTION_COUNT, EnvStep, SnakeEnvironment, action_from_index};
pub use observation::{Observation, create_observation};

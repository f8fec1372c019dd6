//! Snake Env - a deterministic grid Snake game for play and automated agents
//!
//! This library provides:
//! - Core game logic (game module)
//! - Agent environment with action masking and observations (rl module)
//! - Episode statistics (metrics module)
//! - Headless simulation (modes module)

pub mod error;
pub mod game;
pub mod metrics;
pub mod modes;
pub mod rl;

pub use error::ConfigurationError;

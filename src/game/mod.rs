//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! It can be driven by an interactive front-end or by an automated agent.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, next_direction};
pub use board::FreeCells;
pub use config::GameConfig;
pub use engine::{GameState, StepResult, Telemetry};
pub use state::{CollisionType, Position, Snake};

use thiserror::Error;

/// Errors raised when a caller breaks the construction or action contract.
///
/// Game over is not an error; it is reported through the step result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("board size must be at least 3, got {board_size}")]
    BoardTooSmall { board_size: usize },
    #[error("board size must be at most {max}, got {board_size}")]
    BoardTooLarge { board_size: usize, max: usize },
    #[error("invalid action code {0}, expected -1 (no-op) or 0..=3")]
    InvalidActionCode(i64),
    #[error("invalid action index {0}, expected 0..=3")]
    InvalidActionIndex(usize),
    #[error("{name} must be finite, got {value}")]
    InvalidReward { name: &'static str, value: f32 },
    #[error("episode step limit must be at least 1")]
    InvalidEpisodeLimit,
}

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{
    action::{Action, Direction, next_direction},
    board::FreeCells,
    config::GameConfig,
    state::{CollisionType, Position, Snake},
};
use crate::error::ConfigurationError;

/// Length of the snake at the start of every game
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Per-step report of what happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub snake_length: usize,
    /// Head after the step, or the unchanged head if the step terminated
    pub head_position: Position,
    /// Cell the reported head occupied one step earlier
    pub previous_head_position: Position,
    /// Current food cell, [`Position::SENTINEL`] when the board is full
    pub food_position: Position,
    pub food_obtained: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// What the head ran into, set only when terminated
    pub collision: Option<CollisionType>,
    pub telemetry: Telemetry,
}

/// One game in progress.
///
/// Owns the snake, the free cells, the food and the generator that places
/// food, so independent instances never share randomness.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    free: FreeCells,
    food: Option<Position>,
    score: u32,
    steps: u32,
    rng: StdRng,
}

impl GameState {
    /// Start a game from a full configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let board_size = config.board_size;
        let mut state = Self {
            snake: Snake::new(start_head(board_size), Direction::Down, INITIAL_SNAKE_LENGTH),
            free: FreeCells::full(board_size),
            food: None,
            score: 0,
            steps: 0,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        };
        state.reset();
        Ok(state)
    }

    /// Start a game with default scoring
    pub fn initialize(seed: u64, board_size: usize) -> Result<Self, ConfigurationError> {
        Self::new(GameConfig::new(seed, board_size))
    }

    /// Put the snake back at the start and place fresh food.
    ///
    /// The generator is not rewound, so food appears in a different order
    /// than in the previous game. Use [`GameState::reset_with_seed`] to
    /// replay a game exactly.
    pub fn reset(&mut self) {
        let board_size = self.config.board_size;
        self.snake = Snake::new(start_head(board_size), Direction::Down, INITIAL_SNAKE_LENGTH);

        self.free = FreeCells::full(board_size);
        for &segment in self.snake.iter() {
            self.free.remove(segment);
        }

        self.score = 0;
        self.steps = 0;
        self.food = self.place_food();
    }

    /// Reseed the generator, then reset
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self.reset();
    }

    /// Advance the game by one tick.
    ///
    /// Stepping an already terminated game is not guarded here; callers stop
    /// at the first `terminated` result.
    pub fn step(&mut self, action: Action) -> StepResult {
        if let Action::Move(requested) = action {
            self.snake.direction = next_direction(self.snake.direction, requested);
        }

        let previous_head = self.snake.head();
        let candidate = previous_head.moved_in_direction(self.snake.direction);
        let food_obtained = self.food == Some(candidate);
        self.steps += 1;

        // The tail moves away this tick unless the snake grows
        if let Some(collision) = self.check_collision(candidate, !food_obtained) {
            debug!(
                "game over after {} steps: {:?} at ({}, {}), length {}",
                self.steps,
                collision,
                candidate.row,
                candidate.col,
                self.snake.len()
            );
            return StepResult {
                terminated: true,
                collision: Some(collision),
                telemetry: Telemetry {
                    snake_length: self.snake.len(),
                    head_position: previous_head,
                    previous_head_position: self.snake.neck().unwrap_or(previous_head),
                    food_position: self.food_position(),
                    food_obtained: false,
                },
            };
        }

        if !food_obtained {
            if let Some(tail) = self.snake.pop_tail() {
                self.free.insert(tail);
            }
        }
        self.snake.push_head(candidate);
        self.free.remove(candidate);

        if food_obtained {
            self.score = self.score.saturating_add(self.config.food_score);
            self.food = self.place_food();
        }

        StepResult {
            terminated: false,
            collision: None,
            telemetry: Telemetry {
                snake_length: self.snake.len(),
                head_position: candidate,
                previous_head_position: previous_head,
                food_position: self.food_position(),
                food_obtained,
            },
        }
    }

    fn check_collision(&self, pos: Position, tail_vacates: bool) -> Option<CollisionType> {
        if !pos.is_in_bounds(self.config.board_size) {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_after_move(pos, tail_vacates) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Uniform draw among free cells; `None` once the snake fills the board
    fn place_food(&mut self) -> Option<Position> {
        let food = self.free.choose(&mut self.rng);
        match food {
            Some(pos) => debug!("food placed at ({}, {})", pos.row, pos.col),
            None => debug!("board full, no food placed"),
        }
        food
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Cells not covered by the snake
    pub fn free_cells(&self) -> &FreeCells {
        &self.free
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Food cell, or [`Position::SENTINEL`] when none could be placed
    pub fn food_position(&self) -> Position {
        self.food.unwrap_or(Position::SENTINEL)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks taken since the last reset, including a terminating one
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The snake covers the whole board
    pub fn is_victory(&self) -> bool {
        self.snake.len() == self.grid_size()
    }

    #[cfg(test)]
    pub(crate) fn place_food_at(&mut self, pos: Position) {
        assert!(self.free.contains(pos), "food must go on a free cell");
        self.food = Some(pos);
    }
}

fn start_head(board_size: usize) -> Position {
    let mid = (board_size / 2) as i32;
    Position::new(mid + 1, mid)
}

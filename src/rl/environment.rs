use log::debug;

use super::config::EnvConfig;
use super::observation::{Observation, create_observation};
use crate::error::ConfigurationError;
use crate::game::{Action, CollisionType, Direction, GameState, Telemetry};

/// Number of discrete actions: up, left, right, down
pub const ACTION_COUNT: usize = 4;

/// Outcome of one environment step
#[derive(Debug, Clone, PartialEq)]
pub struct EnvStep {
    pub observation: Observation,
    pub reward: f32,
    /// Collision or full board
    pub terminated: bool,
    /// Too many steps without food
    pub truncated: bool,
    /// What the head ran into, if the step was a collision
    pub collision: Option<CollisionType>,
    pub telemetry: Telemetry,
}

impl EnvStep {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Snake environment for automated agents
///
/// Wraps a [`GameState`] and provides:
/// - Grid observations (4 channels)
/// - Discrete action space (4 actions: Up, Left, Right, Down)
/// - An action mask that rules out 180-degree turns
/// - Shaped rewards and episode truncation
pub struct SnakeEnvironment {
    config: EnvConfig,
    state: GameState,
    steps_since_food: usize,
    done: bool,
}

impl SnakeEnvironment {
    /// Create a new Snake environment
    pub fn new(config: EnvConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let state = GameState::new(config.game.clone())?;
        Ok(Self {
            config,
            state,
            steps_since_food: 0,
            done: false,
        })
    }

    /// Reset the environment and return initial observation
    pub fn reset(&mut self) -> Observation {
        self.state.reset();
        self.steps_since_food = 0;
        self.done = false;
        create_observation(&self.state)
    }

    /// Step the environment with a discrete action
    ///
    /// Actions:
    /// - 0: Turn Up
    /// - 1: Turn Left
    /// - 2: Turn Right
    /// - 3: Turn Down
    ///
    /// Once an episode is done further steps change nothing and report
    /// `terminated` with zero reward until [`SnakeEnvironment::reset`].
    pub fn step(&mut self, action_idx: usize) -> Result<EnvStep, ConfigurationError> {
        let action = action_from_index(action_idx)?;

        if self.done {
            return Ok(EnvStep {
                observation: create_observation(&self.state),
                reward: 0.0,
                terminated: true,
                truncated: false,
                collision: None,
                telemetry: self.idle_telemetry(),
            });
        }

        let result = self.state.step(action);
        let telemetry = result.telemetry;

        let mut terminated = result.terminated;
        let mut truncated = false;
        let reward;

        if terminated {
            reward = self.config.death_penalty;
        } else if self.state.is_victory() {
            terminated = true;
            reward = self.config.victory_reward;
        } else {
            if telemetry.food_obtained {
                self.steps_since_food = 0;
            } else {
                self.steps_since_food += 1;
            }
            truncated = self.steps_since_food >= self.config.step_limit();
            reward = self.config.step_penalty
                + if telemetry.food_obtained {
                    self.config.food_reward
                } else {
                    0.0
                };
        }

        self.done = terminated || truncated;
        if self.done {
            debug!(
                "episode finished: score {}, length {}, steps {}, truncated {}",
                self.state.score(),
                telemetry.snake_length,
                self.state.steps(),
                truncated
            );
        }

        Ok(EnvStep {
            observation: create_observation(&self.state),
            reward,
            terminated,
            truncated,
            collision: result.collision,
            telemetry,
        })
    }

    /// Which actions are allowed: every direction except the reverse of the current one
    pub fn action_mask(&self) -> [bool; ACTION_COUNT] {
        let current = self.state.direction();
        Direction::ALL.map(|direction| !current.is_opposite(direction))
    }

    /// Get current observation without stepping
    pub fn observation(&self) -> Observation {
        create_observation(&self.state)
    }

    /// Whether the current episode has ended
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Get reference to current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn idle_telemetry(&self) -> Telemetry {
        let snake = self.state.snake();
        Telemetry {
            snake_length: snake.len(),
            head_position: snake.head(),
            previous_head_position: snake.neck().unwrap_or(snake.head()),
            food_position: self.state.food_position(),
            food_obtained: false,
        }
    }
}

/// Convert discrete action index to game Action
pub fn action_from_index(idx: usize) -> Result<Action, ConfigurationError> {
    Direction::ALL
        .get(idx)
        .map(|&direction| Action::Move(direction))
        .ok_or(ConfigurationError::InvalidActionIndex(idx))
}

//! Headless simulation mode
//!
//! Plays a number of episodes with a seeded random agent that only picks
//! actions allowed by the environment's action mask, and collects episode
//! statistics. Useful for smoke-testing the environment and for measuring
//! a baseline before any training.
//!
//! # Example
//!
//! ```rust
//! use snake_env::modes::{SimulateConfig, SimulateMode};
//!
//! let config = SimulateConfig {
//!     episodes: 3,
//!     ..Default::default()
//! };
//! let stats = SimulateMode::new(config).unwrap().run().unwrap();
//! assert_eq!(stats.games_played, 3);
//! ```

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::metrics::{EpisodeStats, EpisodeSummary};
use crate::rl::{ACTION_COUNT, EnvConfig, SnakeEnvironment};

/// Configuration for simulation mode
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Environment and game setup
    pub env: EnvConfig,

    /// Number of episodes to play
    pub episodes: usize,

    /// Seed for the random agent's choices
    pub agent_seed: u64,

    /// Hard cap on steps per episode, on top of the environment's own truncation
    pub max_steps: Option<usize>,

    /// Log a progress line every N episodes
    pub log_frequency: usize,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            env: EnvConfig::default(),
            episodes: 10,
            agent_seed: 0,
            max_steps: None,
            log_frequency: 1,
        }
    }
}

pub struct SimulateMode {
    env: SnakeEnvironment,
    agent_rng: StdRng,
    stats: EpisodeStats,
    config: SimulateConfig,
}

impl SimulateMode {
    pub fn new(config: SimulateConfig) -> Result<Self> {
        let env = SnakeEnvironment::new(config.env.clone())
            .context("Invalid environment configuration")?;

        Ok(Self {
            env,
            agent_rng: StdRng::seed_from_u64(config.agent_seed),
            stats: EpisodeStats::new(),
            config,
        })
    }

    /// Play all episodes and return the collected statistics
    pub fn run(mut self) -> Result<EpisodeStats> {
        info!(
            "simulating {} episodes on a {}x{} board (seed {})",
            self.config.episodes,
            self.config.env.game.board_size,
            self.config.env.game.board_size,
            self.config.env.game.seed
        );

        for episode in 1..=self.config.episodes {
            let summary = self.play_episode()?;
            self.stats.on_game_over(&summary);

            if self.config.log_frequency > 0 && episode % self.config.log_frequency == 0 {
                info!(
                    "episode {}/{}: score {}, length {}, steps {}{}",
                    episode,
                    self.config.episodes,
                    summary.score,
                    summary.snake_length,
                    summary.steps,
                    outcome_label(&summary)
                );
            }
        }

        info!("{}", self.stats.format_summary());
        Ok(self.stats)
    }

    fn play_episode(&mut self) -> Result<EpisodeSummary> {
        self.env.reset();
        let mut steps = 0usize;

        loop {
            let action = self.choose_action();
            let step = self.env.step(action)?;
            steps += 1;

            let capped = self.config.max_steps.is_some_and(|max| steps >= max);
            if step.done() || capped {
                let state = self.env.state();
                return Ok(EpisodeSummary {
                    score: state.score(),
                    snake_length: state.snake().len(),
                    steps: state.steps(),
                    victory: state.is_victory(),
                    truncated: step.truncated || (capped && !step.terminated),
                    collision: step.collision,
                });
            }
        }
    }

    /// Uniform choice among the actions the mask allows
    fn choose_action(&mut self) -> usize {
        let mask = self.env.action_mask();
        let valid: Vec<usize> = (0..ACTION_COUNT).filter(|&i| mask[i]).collect();
        valid.choose(&mut self.agent_rng).copied().unwrap_or(0)
    }
}

fn outcome_label(summary: &EpisodeSummary) -> &'static str {
    if summary.victory {
        " (victory)"
    } else if summary.truncated {
        " (truncated)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn config(episodes: usize) -> SimulateConfig {
        SimulateConfig {
            env: EnvConfig::new(GameConfig::new(17, 6)),
            episodes,
            agent_seed: 4,
            max_steps: Some(500),
            log_frequency: 0,
        }
    }

    #[test]
    fn test_runs_requested_episodes() {
        let stats = SimulateMode::new(config(5)).unwrap().run().unwrap();

        assert_eq!(stats.games_played, 5);
        assert_eq!(
            stats.wall_collisions + stats.self_collisions + stats.truncations + stats.victories,
            5
        );
        assert!(stats.mean_length() >= 3.0);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let a = SimulateMode::new(config(8)).unwrap().run().unwrap();
        let b = SimulateMode::new(config(8)).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_board_rejected() {
        let mut bad = config(1);
        bad.env.game.board_size = 2;
        assert!(SimulateMode::new(bad).is_err());
    }
}

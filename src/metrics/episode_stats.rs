//! Aggregate statistics over finished games

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::CollisionType;

/// How a single game ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub score: u32,
    pub snake_length: usize,
    pub steps: u32,
    pub victory: bool,
    pub truncated: bool,
    pub collision: Option<CollisionType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub games_played: u32,
    pub high_score: u32,
    pub victories: u32,
    pub wall_collisions: u32,
    pub self_collisions: u32,
    pub truncations: u32,
    pub total_score: u64,
    pub total_length: u64,
    pub total_steps: u64,
}

impl EpisodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_game_over(&mut self, summary: &EpisodeSummary) {
        self.games_played += 1;
        if summary.score > self.high_score {
            self.high_score = summary.score;
        }
        if summary.victory {
            self.victories += 1;
        }
        if summary.truncated {
            self.truncations += 1;
        }
        match summary.collision {
            Some(CollisionType::Wall) => self.wall_collisions += 1,
            Some(CollisionType::SelfCollision) => self.self_collisions += 1,
            None => {}
        }
        self.total_score += u64::from(summary.score);
        self.total_length += summary.snake_length as u64;
        self.total_steps += u64::from(summary.steps);
    }

    pub fn mean_score(&self) -> f64 {
        self.mean(self.total_score)
    }

    pub fn mean_length(&self) -> f64 {
        self.mean(self.total_length)
    }

    pub fn mean_steps(&self) -> f64 {
        self.mean(self.total_steps)
    }

    fn mean(&self, total: u64) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            total as f64 / f64::from(self.games_played)
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "games: {} | high score: {} | mean score: {:.2} | mean length: {:.2} | \
             mean steps: {:.1} | victories: {} | wall: {} | self: {} | truncated: {}",
            self.games_played,
            self.high_score,
            self.mean_score(),
            self.mean_length(),
            self.mean_steps(),
            self.victories,
            self.wall_collisions,
            self.self_collisions,
            self.truncations,
        )
    }

    /// Write the statistics as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize stats")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write stats to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary(score: u32, collision: Option<CollisionType>) -> EpisodeSummary {
        EpisodeSummary {
            score,
            snake_length: 3 + score as usize / 10,
            steps: 20,
            victory: false,
            truncated: collision.is_none(),
            collision,
        }
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = EpisodeStats::new();

        stats.on_game_over(&summary(10, Some(CollisionType::Wall)));
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.on_game_over(&summary(0, Some(CollisionType::SelfCollision)));
        assert_eq!(stats.high_score, 10);

        stats.on_game_over(&summary(50, None));
        assert_eq!(stats.high_score, 50);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wall_collisions, 1);
        assert_eq!(stats.self_collisions, 1);
        assert_eq!(stats.truncations, 1);
    }

    #[test]
    fn test_means() {
        let mut stats = EpisodeStats::new();
        assert_eq!(stats.mean_score(), 0.0);

        stats.on_game_over(&summary(10, Some(CollisionType::Wall)));
        stats.on_game_over(&summary(30, Some(CollisionType::Wall)));
        assert_eq!(stats.mean_score(), 20.0);
        assert_eq!(stats.mean_length(), 5.0);
        assert_eq!(stats.mean_steps(), 20.0);
        assert!(stats.format_summary().contains("high score: 30"));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("stats.json");

        let mut stats = EpisodeStats::new();
        stats.on_game_over(&summary(20, Some(CollisionType::Wall)));
        stats.save(&path).unwrap();

        let loaded: EpisodeStats =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, stats);
    }
}

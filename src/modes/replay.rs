//! Replay a fixed trace of numeric action codes against a seeded game.
//!
//! Produces one record per step so a trace can be diffed across runs or fed
//! to an external consumer as JSON lines.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use crate::game::{Action, CollisionType, GameConfig, GameState, Telemetry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub action: i64,
    pub terminated: bool,
    pub collision: Option<CollisionType>,
    pub score: u32,
    pub telemetry: Telemetry,
}

/// Parse a comma separated list of action codes such as `"3,3,2,-1"`
pub fn parse_action_codes(trace: &str) -> Result<Vec<Action>> {
    trace
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| -> Result<Action> {
            let value: i64 = code
                .parse()
                .with_context(|| format!("Action code {:?} is not an integer", code))?;
            Ok(Action::from_code(value)?)
        })
        .collect()
}

/// Run `actions` on a fresh game, stopping at the first terminating step
pub fn replay_trace(config: &GameConfig, actions: &[Action]) -> Result<Vec<ReplayStep>> {
    let mut state = GameState::new(config.clone()).context("Invalid game configuration")?;
    let mut records = Vec::with_capacity(actions.len());

    for (i, &action) in actions.iter().enumerate() {
        let result = state.step(action);
        records.push(ReplayStep {
            step: i + 1,
            action: action.code(),
            terminated: result.terminated,
            collision: result.collision,
            score: state.score(),
            telemetry: result.telemetry,
        });

        if result.terminated {
            if i + 1 < actions.len() {
                warn!(
                    "game ended at step {}, ignoring {} remaining actions",
                    i + 1,
                    actions.len() - i - 1
                );
            }
            break;
        }
    }

    info!(
        "replayed {} steps, final score {}",
        records.len(),
        state.score()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::game::{Direction, Position};

    #[test]
    fn test_parse_action_codes() {
        let actions = parse_action_codes("3, 1,2 ,-1,0").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Move(Direction::Down),
                Action::Move(Direction::Left),
                Action::Move(Direction::Right),
                Action::Continue,
                Action::Move(Direction::Up),
            ]
        );
        assert!(parse_action_codes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        let err = parse_action_codes("3,9").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::InvalidActionCode(9))
        );
        assert!(parse_action_codes("3,x").is_err());
    }

    #[test]
    fn test_replay_stops_at_wall() {
        let config = GameConfig::new(42, 12);
        let actions = vec![Action::Move(Direction::Down); 10];

        let records = replay_trace(&config, &actions).unwrap();

        // head starts at row 7 on a 12 board: rows 8..=11 are safe
        assert_eq!(records.len(), 5);
        assert!(records[..4].iter().all(|r| !r.terminated));
        let last = records.last().unwrap();
        assert!(last.terminated);
        assert_eq!(last.collision, Some(CollisionType::Wall));
        assert_eq!(last.telemetry.head_position, Position::new(11, 6));
        assert_eq!(records[0].telemetry.previous_head_position, Position::new(7, 6));
        assert_eq!(records[0].action, 3);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let config = GameConfig::new(8, 8);
        let actions = parse_action_codes("2,2,0,0,1,1,1,3,3,-1,2").unwrap();

        let a = replay_trace(&config, &actions).unwrap();
        let b = replay_trace(&config, &actions).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_replay_serializes_to_json() {
        let config = GameConfig::new(1, 6);
        let records = replay_trace(&config, &[Action::Continue]).unwrap();
        let json = serde_json::to_string(&records[0]).unwrap();

        assert!(json.contains("\"snake_length\""));
        assert!(json.contains("\"food_obtained\""));
        assert!(json.contains("\"action\":-1"));
    }
}

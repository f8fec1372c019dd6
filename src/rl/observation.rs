use serde::Serialize;

use crate::game::{GameState, Position};

/// Number of planes in an [`Observation`]
pub const CHANNELS: usize = 4;

/// Grid observation of shape `[CHANNELS, board_size, board_size]`, row-major
///
/// Channels:
/// - 0: Snake head (1.0 at head position)
/// - 1: Snake body (1.0 at body positions, excluding head)
/// - 2: Food location (1.0 at food position, empty once the board is full)
/// - 3: Walls/boundaries (1.0 at grid edges)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    board_size: usize,
    data: Vec<f32>,
}

impl Observation {
    pub fn shape(&self) -> [usize; 3] {
        [CHANNELS, self.board_size, self.board_size]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Value at `pos` in one plane; `None` for an unknown channel or an off-board cell
    pub fn get(&self, channel: usize, pos: Position) -> Option<f32> {
        if channel >= CHANNELS || !pos.is_in_bounds(self.board_size) {
            return None;
        }
        Some(self.data[self.index(channel, pos)])
    }

    /// Sum of one plane
    pub fn channel_sum(&self, channel: usize) -> f32 {
        let plane = self.board_size * self.board_size;
        self.data[channel * plane..(channel + 1) * plane].iter().sum()
    }

    fn index(&self, channel: usize, pos: Position) -> usize {
        (channel * self.board_size + pos.row as usize) * self.board_size + pos.col as usize
    }

    fn set(&mut self, channel: usize, pos: Position) {
        let idx = self.index(channel, pos);
        self.data[idx] = 1.0;
    }
}

/// Create a 4-channel observation from game state
pub fn create_observation(state: &GameState) -> Observation {
    let size = state.board_size();
    let mut obs = Observation {
        board_size: size,
        data: vec![0.0; CHANNELS * size * size],
    };

    obs.set(0, state.snake().head());

    for &pos in state.snake().iter().skip(1) {
        obs.set(1, pos);
    }

    if let Some(food) = state.food() {
        obs.set(2, food);
    }

    let last = size as i32 - 1;
    for i in 0..size as i32 {
        obs.set(3, Position::new(0, i));
        obs.set(3, Position::new(last, i));
        obs.set(3, Position::new(i, 0));
        obs.set(3, Position::new(i, last));
    }

    obs
}

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the board, addressed by row (growing downward) and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Reported as the food cell when no free cell is left
    pub const SENTINEL: Position = Position { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    /// True if both coordinates lie in `[0, board_size)`
    pub fn is_in_bounds(&self, board_size: usize) -> bool {
        let size = board_size as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// True if the two cells share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head, direction and length.
    ///
    /// Body segments trail behind the head, opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (d_row, d_col) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-d_row * i, -d_col * i))
            .collect();

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Segment right behind the head, if any
    pub fn neck(&self) -> Option<Position> {
        self.body.get(1).copied()
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if the head moving onto `pos` would hit the body.
    ///
    /// When `tail_vacates` is set the tail cell is free to enter, because
    /// it moves away in the same step.
    pub fn collides_after_move(&self, pos: Position, tail_vacates: bool) -> bool {
        let end = if tail_vacates {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        self.body.range(..end).any(|&segment| segment == pos)
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

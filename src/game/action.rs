use crate::error::ConfigurationError;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in action-index order: up, left, right, down
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the (d_row, d_col) step for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }
}

/// Direction after applying `requested` to a snake heading `current`.
///
/// A request for the exact reverse is ignored.
pub fn next_direction(current: Direction, requested: Direction) -> Direction {
    if current.is_opposite(requested) {
        current
    } else {
        requested
    }
}

/// Action that can be taken in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn towards a specific direction
    Move(Direction),
    /// Continue in current direction
    Continue,
}

impl Action {
    /// Numeric code used by front-ends and agent harnesses for "no turn"
    pub const NO_OP_CODE: i64 = -1;

    /// Decode a numeric action code.
    ///
    /// - `0` → up, `1` → left, `2` → right, `3` → down
    /// - `-1` → continue
    pub fn from_code(code: i64) -> Result<Self, ConfigurationError> {
        match code {
            Self::NO_OP_CODE => Ok(Action::Continue),
            0..=3 => Ok(Action::Move(Direction::ALL[code as usize])),
            _ => Err(ConfigurationError::InvalidActionCode(code)),
        }
    }

    /// Numeric code of this action, inverse of [`Action::from_code`]
    pub fn code(&self) -> i64 {
        match self {
            Action::Move(direction) => direction.index() as i64,
            Action::Continue => Self::NO_OP_CODE,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_next_direction_ignores_reverse() {
        assert_eq!(next_direction(Direction::Down, Direction::Up), Direction::Down);
        assert_eq!(next_direction(Direction::Left, Direction::Right), Direction::Left);
        assert_eq!(next_direction(Direction::Down, Direction::Left), Direction::Left);
        assert_eq!(next_direction(Direction::Up, Direction::Up), Direction::Up);
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(Action::from_code(0), Ok(Action::Move(Direction::Up)));
        assert_eq!(Action::from_code(1), Ok(Action::Move(Direction::Left)));
        assert_eq!(Action::from_code(2), Ok(Action::Move(Direction::Right)));
        assert_eq!(Action::from_code(3), Ok(Action::Move(Direction::Down)));
        assert_eq!(Action::from_code(-1), Ok(Action::Continue));

        for code in -1..=3 {
            assert_eq!(Action::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_invalid_action_code() {
        assert_eq!(
            Action::from_code(4),
            Err(ConfigurationError::InvalidActionCode(4))
        );
        assert_eq!(
            Action::from_code(-2),
            Err(ConfigurationError::InvalidActionCode(-2))
        );
    }
}

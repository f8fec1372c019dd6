//! Free-cell bookkeeping for the board.
//!
//! Cells not covered by the snake live in a dense vector so a uniformly
//! random one can be drawn in constant time. A per-cell slot table maps each
//! board cell to its index in that vector, which keeps membership tests,
//! insertion and removal constant time too. Iteration order depends only on
//! the sequence of insertions and removals, never on hashing, so a seeded
//! generator always picks the same cell.

use rand::Rng;

use super::state::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct FreeCells {
    board_size: usize,
    cells: Vec<Position>,
    slots: Vec<Option<usize>>,
}

impl FreeCells {
    /// Every cell of a `board_size` × `board_size` board, row-major
    pub fn full(board_size: usize) -> Self {
        let cells: Vec<Position> = (0..board_size as i32)
            .flat_map(|row| (0..board_size as i32).map(move |col| Position::new(row, col)))
            .collect();
        let slots = (0..cells.len()).map(Some).collect();

        Self {
            board_size,
            cells,
            slots,
        }
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        if pos.is_in_bounds(self.board_size) {
            Some(pos.row as usize * self.board_size + pos.col as usize)
        } else {
            None
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cell_index(pos)
            .is_some_and(|index| self.slots[index].is_some())
    }

    /// Mark `pos` as free. Returns false if it was already free or off-board.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(index) = self.cell_index(pos) else {
            return false;
        };
        if self.slots[index].is_some() {
            return false;
        }
        self.slots[index] = Some(self.cells.len());
        self.cells.push(pos);
        true
    }

    /// Mark `pos` as taken. Returns false if it was not free.
    pub fn remove(&mut self, pos: Position) -> bool {
        let Some(index) = self.cell_index(pos) else {
            return false;
        };
        let Some(slot) = self.slots[index].take() else {
            return false;
        };
        self.cells.swap_remove(slot);
        if let Some(&moved) = self.cells.get(slot) {
            if let Some(moved_index) = self.cell_index(moved) {
                self.slots[moved_index] = Some(slot);
            }
        }
        true
    }

    /// Draw one free cell uniformly at random with a single `gen_range` draw
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<Position> {
        if self.cells.is_empty() {
            return None;
        }
        Some(self.cells[rng.gen_range(0..self.cells.len())])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_full_board() {
        let free = FreeCells::full(4);
        assert_eq!(free.len(), 16);
        assert!(free.contains(Position::new(0, 0)));
        assert!(free.contains(Position::new(3, 3)));
        assert!(!free.contains(Position::new(4, 0)));
        assert!(!free.contains(Position::new(-1, 2)));
    }

    #[test]
    fn test_remove_and_insert() {
        let mut free = FreeCells::full(3);

        assert!(free.remove(Position::new(0, 0)));
        assert!(!free.remove(Position::new(0, 0)));
        assert!(!free.contains(Position::new(0, 0)));
        assert_eq!(free.len(), 8);

        // the cell swapped into slot 0 must still be tracked
        assert!(free.contains(Position::new(2, 2)));
        assert!(free.remove(Position::new(2, 2)));
        assert_eq!(free.len(), 7);

        assert!(free.insert(Position::new(0, 0)));
        assert!(!free.insert(Position::new(0, 0)));
        assert!(!free.insert(Position::new(5, 5)));
        assert_eq!(free.len(), 8);

        let mut cells: Vec<Position> = free.iter().copied().collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_choose_empty() {
        let mut free = FreeCells::full(3);
        let all: Vec<Position> = free.iter().copied().collect();
        for pos in all {
            free.remove(pos);
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert!(free.is_empty());
        assert_eq!(free.choose(&mut rng), None);
    }

    #[test]
    fn test_choose_only_free_cells_and_covers_all() {
        let mut free = FreeCells::full(4);
        free.remove(Position::new(1, 1));
        free.remove(Position::new(2, 2));

        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..14_000 {
            let pos = free.choose(&mut rng).unwrap();
            *counts.entry(pos).or_default() += 1;
        }

        assert!(!counts.contains_key(&Position::new(1, 1)));
        assert!(!counts.contains_key(&Position::new(2, 2)));
        assert_eq!(counts.len(), 14);
        // expected 1000 per cell
        assert!(counts.values().all(|&n| (700..1300).contains(&n)));
    }

    #[test]
    fn test_choose_is_deterministic() {
        let free = FreeCells::full(6);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(free.choose(&mut a), free.choose(&mut b));
        }
    }
}

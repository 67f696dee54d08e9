//! Board module - layout of numbers on the grid
//!
//! The board is a 10x10 grid stored as a flat row-major sequence where the
//! index is the cell position and the value is the number shown there.
//! An idle game has an empty layout; a started game holds a permutation of 0..99.

use crate::types::{BOARD_SIZE, GRID_DIMENSION};

/// Ordered board values, index = position (row * 10 + col)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoardLayout {
    numbers: Vec<u8>,
}

impl BoardLayout {
    /// Layout with no cells (idle board)
    pub fn empty() -> Self {
        Self {
            numbers: Vec::new(),
        }
    }

    pub fn from_numbers(numbers: Vec<u8>) -> Self {
        Self { numbers }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Number shown at `position`, if any
    pub fn get(&self, position: usize) -> Option<u8> {
        self.numbers.get(position).copied()
    }

    /// Position holding `number`, if any
    pub fn position_of(&self, number: u8) -> Option<usize> {
        self.numbers.iter().position(|&n| n == number)
    }

    /// Check that the layout holds each of 0..99 exactly once
    pub fn is_permutation(&self) -> bool {
        if self.numbers.len() != BOARD_SIZE as usize {
            return false;
        }
        let mut seen = [false; BOARD_SIZE as usize];
        for &n in &self.numbers {
            match seen.get_mut(n as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.numbers.chunks(GRID_DIMENSION as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered() -> BoardLayout {
        BoardLayout::from_numbers((0..100).collect())
    }

    #[test]
    fn test_empty_board() {
        let board = BoardLayout::empty();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.get(0), None);
        assert!(!board.is_permutation());
        assert_eq!(board.rows().count(), 0);
    }

    #[test]
    fn test_get_and_position_of() {
        let board = BoardLayout::from_numbers((0..100).rev().collect());
        assert_eq!(board.get(0), Some(99));
        assert_eq!(board.get(99), Some(0));
        assert_eq!(board.get(100), None);
        assert_eq!(board.position_of(99), Some(0));
        assert_eq!(board.position_of(100), None);
    }

    #[test]
    fn test_is_permutation() {
        assert!(ordered().is_permutation());

        let mut dup: Vec<u8> = (0..100).collect();
        dup[5] = 6;
        assert!(!BoardLayout::from_numbers(dup).is_permutation());

        let short: Vec<u8> = (0..99).collect();
        assert!(!BoardLayout::from_numbers(short).is_permutation());

        let mut out_of_range: Vec<u8> = (0..100).collect();
        out_of_range[0] = 100;
        assert!(!BoardLayout::from_numbers(out_of_range).is_permutation());
    }

    #[test]
    fn test_rows() {
        let board = ordered();
        let rows: Vec<&[u8]> = board.rows().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(rows[9][9], 99);
    }
}

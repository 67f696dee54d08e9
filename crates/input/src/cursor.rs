//! Keyboard cursor over the 10x10 board.

use crate::types::{grid_coords, grid_index, GRID_DIMENSION};

/// Highlighted board cell; moves clamp at the edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardCursor {
    row: u8,
    col: u8,
}

impl BoardCursor {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Board position under the cursor (row-major)
    pub fn index(&self) -> usize {
        // row and col are clamped to the grid by every move
        grid_index(self.row, self.col).unwrap_or_default()
    }

    pub fn move_by(&mut self, d_row: i8, d_col: i8) {
        self.row = step(self.row, d_row);
        self.col = step(self.col, d_col);
    }

    /// Jump to a board position; out-of-range positions are ignored.
    pub fn move_to_index(&mut self, index: usize) {
        if let Some((row, col)) = grid_coords(index) {
            self.row = row;
            self.col = col;
        }
    }
}

fn step(value: u8, delta: i8) -> u8 {
    let max = GRID_DIMENSION as i16 - 1;
    (value as i16 + delta as i16).clamp(0, max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_top_left() {
        let cursor = BoardCursor::new();
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_moves_and_clamps() {
        let mut cursor = BoardCursor::new();
        cursor.move_by(-1, -1);
        assert_eq!(cursor.index(), 0);

        cursor.move_by(2, 3);
        assert_eq!(cursor.index(), 23);

        cursor.move_by(20, 20);
        assert_eq!(cursor.index(), 99);
    }

    #[test]
    fn test_move_to_index() {
        let mut cursor = BoardCursor::new();
        cursor.move_to_index(57);
        assert_eq!((cursor.row(), cursor.col()), (5, 7));
        cursor.move_to_index(100);
        assert_eq!(cursor.index(), 57);
    }
}

//! Board module - the falling-block playfield
//!
//! The board is a 10x20 grid where each cell is empty or filled with a piece kind.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! New pieces spawn with their 4x4 box at (3, 0).

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Grid<Cell, W, H>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: Grid::new(None),
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.cells.get(x, y)
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        self.cells.set(x, y, cell)
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.cells
            .row(y)
            .map_or(false, |row| row.iter().all(|cell| cell.is_some()))
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Two-pointer pass: surviving rows are copied down over the cleared ones,
    /// then the vacated rows at the top are emptied. In play a piece spans at
    /// most four rows; hand-built boards may report more.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, H> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = H;

        // Scan from bottom to top
        for read_y in (0..H).rev() {
            if self.is_row_full(read_y) {
                // One entry per row, so capacity H is never exceeded
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.cells.copy_row(read_y, write_y);
                }
            }
        }

        for y in 0..write_y {
            self.cells.fill_row(y, None);
        }

        cleared_rows
    }

    /// Stamp cells onto the board at the given position
    /// Returns false (and leaves the board untouched) if any cell is out of bounds or occupied
    pub fn lock_cells(&mut self, shape: &[(i32, i32)], x: i32, y: i32, kind: PieceKind) -> bool {
        if !shape.iter().all(|&(dx, dy)| self.is_valid(x + dx, y + dy)) {
            return false;
        }
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
        true
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        self.cells.count(|c| c.is_some())
    }

    /// Row-major view of the cells
    pub fn rows(&self) -> &[[Cell; W]; H] {
        self.cells.rows()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i32 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_new() {
        let board = Board::new();
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(0, 0, Some(PieceKind::I)));
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert!(board.is_occupied(0, 0));
        assert!(!board.is_valid(0, 0));
        assert!(!board.set(10, 0, Some(PieceKind::I)));
        assert_eq!(board.get(-1, 5), None);
        assert!(!board.is_valid(0, 20));
    }

    #[test]
    fn test_clear_single_row_shifts_above_down() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        board.set(4, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 18), Some(None));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        fill_row(&mut board, 17, PieceKind::O);
        board.set(0, 18, Some(PieceKind::S));
        board.set(9, 16, Some(PieceKind::Z));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(9, 18), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled(), 2);
    }

    #[test]
    fn test_clear_reports_every_full_row() {
        let mut board = Board::new();
        for y in 14..20 {
            fill_row(&mut board, y, PieceKind::L);
        }
        board.set(2, 13, Some(PieceKind::O));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18, 17, 16, 15, 14]);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_lock_cells_rejects_overlap() {
        let mut board = Board::new();
        board.set(1, 1, Some(PieceKind::J));
        let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
        assert!(!board.lock_cells(&shape, 0, 0, PieceKind::O));
        assert_eq!(board.filled(), 1);
        assert!(board.lock_cells(&shape, 4, 4, PieceKind::O));
        assert_eq!(board.filled(), 5);
    }
}

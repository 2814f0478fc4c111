//! Board module - manages the game grid
//!
//! The board is a `rows` x `cols` grid (20x10 by default). Each cell carries an
//! occupant marker and a lock state: `Clear` cells belong to the falling piece
//! (or are empty) and are rebuilt on every update, `Merged` cells are locked.
//! Uses a flat row-major vector; coordinates are (x, y) with row 0 at the top.

use crate::game_state::Tetromino;
use crate::types::{Cell, CellState};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board where every cell is `(Empty, Clear)`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive, got {}x{}", rows, cols);
        Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows
    }

    /// Within bounds and not locked.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.state() == CellState::Clear)
    }

    /// One row as a slice, top row first.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Reset every `Clear` cell to `(Empty, Clear)`, erasing the falling
    /// piece's footprint. `Merged` cells are left alone.
    pub fn clear_transient(&mut self) {
        for cell in &mut self.cells {
            if cell.state() == CellState::Clear {
                *cell = Cell::EMPTY;
            }
        }
    }

    /// Stamp the piece's occupied cells, `Merged` if it has collided and
    /// `Clear` otherwise. Cells outside the board are skipped.
    pub fn stamp(&mut self, piece: &Tetromino) {
        for (dx, dy, kind) in piece.shape.minos() {
            let cell = if piece.collided {
                Cell::merged(kind)
            } else {
                Cell::transient(kind)
            };
            self.set(piece.x + dx, piece.y + dy, cell);
        }
    }

    /// A row is complete when every cell is locked.
    ///
    /// Merged cells always carry an occupant, so this also means the row has
    /// no empty cell.
    pub fn is_row_complete(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().all(|cell| cell.is_merged())
    }

    /// Remove every complete row and insert empty rows at the top.
    ///
    /// Single pass: complete rows are classified on the board as it stood
    /// before the sweep, remaining rows keep their relative order.
    /// Returns the number of rows removed.
    pub fn sweep_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_y = self.rows;
        let mut cleared = 0;

        // Scan from bottom to top, compacting kept rows downward.
        for read_y in (0..self.rows).rev() {
            if self.is_row_complete(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::EMPTY;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset the whole board to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Number of locked cells.
    pub fn merged_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_merged()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLS)
    }
}

/// Re-derive the board for the current active piece.
///
/// Starts from `prev`, erases the previous transient footprint and stamps
/// `piece` on top of the locked layer. Does not spawn or sweep.
pub fn derive_board(prev: &Board, piece: &Tetromino) -> Board {
    let mut next = prev.clone();
    next.clear_transient();
    next.stamp(piece);
    next
}

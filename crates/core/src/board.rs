//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a
//! piece kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 left to right and y in 0..19 top
//! to bottom. Pieces are addressed by the top-left corner of their 4x4
//! matrix, which may sit above the visible top during spawn (y < 0).

use arrayvec::ArrayVec;

use blockfall_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::PieceMatrix;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The single legality predicate behind every mutation.
    ///
    /// For each occupied cell (i, j) of `matrix`, the board position
    /// (x + j, y + i) must be horizontally in bounds and above the
    /// floor. Rows above the visible top (y + i < 0) are legal during
    /// spawn and skip only the occupancy check; everything else must
    /// land on an empty cell.
    pub fn is_valid_position(&self, matrix: &PieceMatrix, x: i8, y: i8) -> bool {
        for (i, row) in matrix.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    continue;
                }
                let px = x + j as i8;
                let py = y + i as i8;
                if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                    return false;
                }
                if py >= 0 && self.cells[(py as usize) * (BOARD_WIDTH as usize) + px as usize].is_some() {
                    return false;
                }
            }
        }
        true
    }

    /// Write the occupied cells of `matrix` into the board.
    ///
    /// No validation: callers must have passed
    /// [`is_valid_position`](Self::is_valid_position) first. Cells above
    /// the visible top are clipped away.
    pub fn place(&mut self, matrix: &PieceMatrix, x: i8, y: i8) {
        for (i, row) in matrix.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    if let Some(idx) = Self::index(x + j as i8, y + i as i8) {
                        self.cells[idx] = *cell;
                    }
                }
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return their indices (bottom to top).
    ///
    /// Non-full rows shift down by the number of full rows below them
    /// and fresh empty rows appear at the top, so simultaneous and
    /// non-contiguous clears (up to four at once) come out right in a
    /// single pass. Two-pointer compaction, zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
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

        // Empty rows take the place of everything that shifted down.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Copy the grid out as color-id markers (0 = empty, 1..=7 = kind).
    pub fn write_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = self.cells[y * BOARD_WIDTH as usize + x]
                    .map(|kind| kind.color_id())
                    .unwrap_or(0);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

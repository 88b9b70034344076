//! Piece catalog and rotation.
//!
//! Every piece lives in a 4x4 matrix; the seven spawn matrices below are
//! immutable templates and a falling piece works on its own copy.
//! Rotation is a pure clockwise transform of that copy and never looks
//! at the board; validation is the caller's job.

use blockfall_types::{Cell, PieceKind, PIECE_MATRIX_SIZE};

/// A 4x4 piece matrix. Occupied cells carry the piece kind, which maps
/// 1:1 onto the nonzero color ids the board grid exports.
pub type PieceMatrix = [[Cell; PIECE_MATRIX_SIZE]; PIECE_MATRIX_SIZE];

/// Spawn-orientation matrix for a piece kind.
///
/// These are the canonical shapes: every kind occupies exactly four
/// cells and fits the middle rows of the matrix so a fresh piece can
/// overhang the top of the board without losing cells.
pub fn spawn_matrix(kind: PieceKind) -> PieceMatrix {
    let c: Cell = Some(kind);
    let n: Cell = None;
    match kind {
        PieceKind::I => [
            [n, n, n, n],
            [c, c, c, c],
            [n, n, n, n],
            [n, n, n, n],
        ],
        PieceKind::O => [
            [n, n, n, n],
            [n, c, c, n],
            [n, c, c, n],
            [n, n, n, n],
        ],
        PieceKind::T => [
            [n, n, n, n],
            [n, c, n, n],
            [c, c, c, n],
            [n, n, n, n],
        ],
        PieceKind::S => [
            [n, n, n, n],
            [n, c, c, n],
            [c, c, n, n],
            [n, n, n, n],
        ],
        PieceKind::Z => [
            [n, n, n, n],
            [c, c, n, n],
            [n, c, c, n],
            [n, n, n, n],
        ],
        PieceKind::J => [
            [n, n, n, n],
            [c, n, n, n],
            [c, c, c, n],
            [n, n, n, n],
        ],
        PieceKind::L => [
            [n, n, n, n],
            [n, n, c, n],
            [c, c, c, n],
            [n, n, n, n],
        ],
    }
}

/// Rotate a piece matrix 90° clockwise: `out[j][N-1-i] = in[i][j]`.
///
/// Pure and aliasing-free; four applications return the input.
pub fn rotate_cw(matrix: &PieceMatrix) -> PieceMatrix {
    let n = PIECE_MATRIX_SIZE;
    let mut out: PieceMatrix = [[None; PIECE_MATRIX_SIZE]; PIECE_MATRIX_SIZE];
    for (i, row) in matrix.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            out[j][n - 1 - i] = *cell;
        }
    }
    out
}

/// Number of occupied cells in a matrix.
pub fn occupied_cells(matrix: &PieceMatrix) -> usize {
    matrix
        .iter()
        .flat_map(|row| row.iter())
        .filter(|cell| cell.is_some())
        .count()
}

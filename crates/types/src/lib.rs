//! Shared types and constants for blockfall.
//!
//! Pure data with no dependencies, usable from the engine, the input
//! mapper and the renderer alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0) — the 4x4 piece matrix is horizontally
//!   centered on the board and may initially overhang rows above the
//!   visible top.
//!
//! # Timing
//!
//! All timing is in milliseconds and driven by a fixed frame quantum:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame quantum (~60 FPS) |
//! | `BASE_FALL_MS` | 800 | Gravity interval at level 0 |
//! | `FALL_MS_PER_LEVEL` | 80 | Gravity speed-up per level |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor |
//!
//! The gravity interval for a level is
//! `max(MIN_FALL_MS, BASE_FALL_MS - level * FALL_MS_PER_LEVEL)`,
//! non-increasing in the level and never below 100ms.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side of the square piece matrix (4x4)
pub const PIECE_MATRIX_SIZE: usize = 4;

/// Spawn x coordinate: `BOARD_WIDTH / 2 - 2` centers the 4x4 matrix.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn y coordinate (top row)
pub const SPAWN_Y: i8 = 0;

/// Fixed frame quantum in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0
pub const BASE_FALL_MS: u32 = 800;

/// Gravity interval reduction per level
pub const FALL_MS_PER_LEVEL: u32 = 80;

/// Gravity interval floor; levels past 8 all fall at this speed
pub const MIN_FALL_MS: u32 = 100;

/// Lines cleared per level step (level = lines / 10)
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded per successful soft-drop row
pub const SOFT_DROP_POINTS: u32 = 1;

/// Base multiplier of the line-clear formula: `cleared^2 * 100 * (level + 1)`
pub const LINE_CLEAR_BASE: u32 = 100;

/// The seven piece kinds.
///
/// Each kind has a fixed spawn shape and a color identity. The numeric
/// color ids (1..=7) match the cell markers the board grid exports:
/// - **I**: cyan (1)
/// - **O**: yellow (2)
/// - **T**: magenta (3)
/// - **S**: green (4)
/// - **Z**: red (5)
/// - **J**: blue (6)
/// - **L**: orange (7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in color-id order (index = color id - 1).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Nonzero cell marker for this kind (1..=7).
    pub fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`color_id`](Self::color_id); `None` for 0 or out-of-range markers.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// A board cell: empty or filled with the kind that locked there.
pub type Cell = Option<PieceKind>;

/// The five logical actions the engine accepts.
///
/// Mapping physical keys onto these is the input collaborator's job;
/// the engine only ever sees this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (+1 point), locking it if it rests
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// End the session immediately
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_position_centers_piece_matrix() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn color_ids_roundtrip() {
        for kind in PieceKind::ALL {
            let id = kind.color_id();
            assert!((1..=7).contains(&id));
            assert_eq!(PieceKind::from_color_id(id), Some(kind));
        }
        assert_eq!(PieceKind::from_color_id(0), None);
        assert_eq!(PieceKind::from_color_id(8), None);
    }

    #[test]
    fn color_ids_are_distinct() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let id = kind.color_id() as usize;
            assert!(!seen[id], "duplicate color id {}", id);
            seen[id] = true;
        }
    }
}

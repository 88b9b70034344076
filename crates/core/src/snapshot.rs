//! Read-only view of the session, handed to renderers.
//!
//! Carries exactly what a draw call needs: the grid as color-id
//! markers, the active piece, the ghost landing row, the lookahead
//! kind and the session counters. Plain `Copy` data so a frame loop
//! can keep one instance and refill it every frame without allocating.

use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::PieceMatrix;

/// The active piece as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Board grid as color ids: 0 = empty, 1..=7 = locked piece kind.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Row where the active piece would land; equals the active row
    /// when the piece already rests.
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        }
    }
}

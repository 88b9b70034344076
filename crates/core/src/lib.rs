//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and
//! simulation logic. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: same seed produces the same piece sequence
//! - **Testable**: time enters only through `GameState::tick(elapsed_ms)`
//! - **Portable**: runs in any environment (terminal, headless, tests)
//!
//! # Module structure
//!
//! - [`board`]: 10x20 grid with the single legality predicate, piece
//!   placement and full-row clearing
//! - [`pieces`]: 4x4 spawn matrices for the seven kinds and the pure
//!   clockwise rotation transform
//! - [`game`]: the engine state machine (spawn, move, rotate, soft
//!   drop, gravity, lock, game over)
//! - [`rng`]: seeded LCG with uniform independent piece draws
//! - [`scoring`]: line-clear points, level derivation, gravity pacing
//! - [`snapshot`]: the read-only view handed to renderers
//!
//! # Game rules
//!
//! This implementation follows the classic single-player rules:
//!
//! - Rotation is a plain matrix transform with no wall kicks; a
//!   rotation that collides is rejected outright.
//! - The next piece is an independent uniform draw. There is no 7-bag,
//!   so long runs of one kind can and do happen.
//! - A piece locks the moment a downward step (gravity or soft drop)
//!   is blocked. There is no lock delay, hold, or hard drop.
//! - Clearing n rows scores `n^2 * 100 * (level + 1)` using the level
//!   from before the clear; the level is `lines / 10`.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert!(game.score() >= 1); // soft drop awards a point per row
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use game::{ActivePiece, GameState};
pub use pieces::{occupied_cells, rotate_cw, spawn_matrix, PieceMatrix};
pub use rng::SimpleRng;
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

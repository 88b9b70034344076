//! Terminal rendering for blockfall.
//!
//! A small game-oriented rendering layer: [`GameView`] maps an engine
//! snapshot into a [`FrameBuffer`] of styled character cells (pure, no
//! I/O, unit-testable) and [`TerminalRenderer`] flushes framebuffers to
//! the real terminal with diff-based redraws. No widget/layout
//! framework; the board aspect ratio is controlled directly (two
//! columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

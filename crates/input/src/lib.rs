//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events onto [`blockfall_types::GameAction`] and
//! provides the non-blocking poll the frame loop consumes. The engine
//! never sees key codes; which physical keys mean what is decided here.

pub mod map;
pub mod poll;

pub use blockfall_types as types;

pub use map::handle_key_event;
pub use poll::{poll_action, wait_for_key};

//! Blockfall (workspace facade crate).
//!
//! Re-exports the `blockfall::{core,input,term,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

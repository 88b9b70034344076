//! Scoring module - line-clear points, level derivation, gravity pacing
//!
//! The formulas are the classic quadratic ones:
//! - clearing n rows at once scores `n^2 * 100 * (level + 1)`, using
//!   the level in effect before the clear;
//! - the level is `total lines / 10`;
//! - the gravity interval shrinks by 80ms per level down to a 100ms
//!   floor.

use blockfall_types::{
    BASE_FALL_MS, FALL_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_CLEAR_BASE, MIN_FALL_MS,
};

/// Points for clearing `lines` rows at once at the given (pre-clear) level.
///
/// The quadratic makes multi-row clears worth chasing: at level 0 one
/// row is 100 points but four rows are 1600, not 400.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let n = lines as u32;
    n * n * LINE_CLEAR_BASE * (level + 1)
}

/// Level derived from the total number of cleared lines.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval for a level: `max(100, 800 - 80 * level)` ms.
///
/// Non-increasing in the level; saturating arithmetic keeps absurdly
/// high levels pinned at the floor instead of wrapping.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_mul(FALL_MS_PER_LEVEL))
        .max(MIN_FALL_MS)
}

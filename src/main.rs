//! Terminal blockfall runner.
//!
//! Single-threaded frame loop: render the current snapshot, wait for
//! input until the next tick boundary, feed elapsed time to the engine.
//! Uses crossterm for input and a framebuffer-based renderer (no widget
//! framework).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::GameState;
use blockfall::input::{poll_action, wait_for_key};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    game.start();

    let view = GameView::default();
    let mut snap = game.snapshot();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        if game.game_over() {
            // Leave the final frame up until the player acknowledges it.
            wait_for_key()?;
            return Ok(());
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Quit goes through the engine like any other action: it sets
        // game over, and the next frame shows the final score overlay.
        if let Some(action) = poll_action(timeout)? {
            game.apply_action(action);
        }

        // Tick. Advancing by the quantum instead of resetting to now
        // keeps the cadence accurate when a frame overshoots 16ms.
        if last_tick.elapsed() >= tick_duration {
            last_tick += tick_duration;
            game.tick(TICK_MS);
        }

        game.snapshot_into(&mut snap);
    }
}

/// Seed the piece generator from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

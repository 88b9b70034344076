//! Non-blocking event polling for the frame loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use blockfall_types::GameAction;

use crate::map::handle_key_event;

/// Poll for at most one game action.
///
/// Waits up to `timeout` for an event (pass `Duration::ZERO` for a pure
/// non-blocking check) and returns the mapped action of the first key
/// press, if any. Key releases, terminal auto-repeat release events and
/// non-key events (resize, focus) all come back as `None` — an empty
/// frame is not an error.
pub fn poll_action(timeout: Duration) -> io::Result<Option<GameAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            return Ok(handle_key_event(key));
        }
    }

    Ok(None)
}

/// Block until any key is pressed.
///
/// Used at the session boundary: the game-over screen stays up until
/// the player acknowledges it.
pub fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

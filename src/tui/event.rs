//! Event handling for the countdown screen.
//!
//! One poll deadline serves two masters: key input and the one-second tick.
//! `next_event` blocks until whichever comes first.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::TomoError;
use crate::timer::TickClock;

/// Command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the session immediately.
    Quit,
    /// Pause or resume the countdown.
    TogglePause,
}

/// What the run loop should react to next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The one-second tick came due.
    Tick,
    /// A mapped key was pressed.
    Input(Action),
}

/// Wait for the next tick or mapped key, whichever arrives first.
///
/// Unmapped keys and non-key events are swallowed here so the caller only
/// wakes for actual work. The clock is advanced when a tick is returned.
///
/// # Errors
///
/// Returns an error if event polling or reading fails.
pub fn next_event(clock: &mut TickClock) -> Result<TimerEvent, TomoError> {
    loop {
        let ready = event::poll(clock.timeout())
            .map_err(|e| TomoError::terminal("event poll", e))?;

        if ready {
            if let Event::Key(key) =
                event::read().map_err(|e| TomoError::terminal("event read", e))?
            {
                if let Some(action) = map_key(key) {
                    return Ok(TimerEvent::Input(action));
                }
            }
        } else if clock.is_due() {
            clock.advance();
            return Ok(TimerEvent::Tick);
        }
    }
}

/// Map a key event to a timer command.
fn map_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::TogglePause),
        _ => None,
    }
}

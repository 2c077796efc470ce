//! Countdown screen.
//!
//! Owns the run loop: terminal setup and teardown, and the draw/poll cycle
//! that multiplexes one-second ticks with key input. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{Action, TimerEvent};

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TomoError;
use crate::timer::TickClock;

/// How the countdown screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The session ran all the way through its long break.
    Completed,
    /// The user quit before the session finished.
    QuitEarly,
}

/// Run the countdown until the session finishes or the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the event loop
/// hits an I/O failure. The terminal is restored in either case.
pub fn run(app: &mut App) -> Result<SessionOutcome, TomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TomoError::terminal("raw mode setup", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomoError::terminal("terminal setup", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| TomoError::terminal("terminal setup", e))?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// The main loop: draw, then wait for whichever comes first, a tick or a
/// mapped key. Quit returns without another draw.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<SessionOutcome, TomoError> {
    let mut clock = TickClock::new(Duration::from_secs(1));

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomoError::terminal("draw", e))?;

        if app.session().is_terminal() {
            return Ok(SessionOutcome::Completed);
        }

        match event::next_event(&mut clock)? {
            TimerEvent::Input(Action::Quit) => return Ok(SessionOutcome::QuitEarly),
            TimerEvent::Input(Action::TogglePause) => app.toggle_pause(),
            TimerEvent::Tick => app.tick(),
        }
    }
}

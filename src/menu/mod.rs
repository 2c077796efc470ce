//! Duration selection menu.
//!
//! A small full-screen list picker shown before the timer starts: work
//! choices first, then rest choices. Returns the two chosen labels; mapping
//! them to durations is the caller's job.

mod picker;

pub use picker::{MenuPicker, Stage};

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::error::TomoError;

/// Run the selection menu and return the chosen (work, rest) labels.
///
/// # Errors
///
/// Returns `TomoError::MenuAborted` if the user quits before completing both
/// selections, or `TomoError::Terminal` if the terminal fails.
pub fn run_selection_menu() -> Result<(String, String), TomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TomoError::terminal("raw mode setup", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomoError::terminal("terminal setup", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| TomoError::terminal("terminal setup", e))?;

    let mut picker = MenuPicker::new();
    let result = run_menu(&mut terminal, &mut picker);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Drive the picker until both selections are made or the user aborts.
fn run_menu<B: Backend>(
    terminal: &mut Terminal<B>,
    picker: &mut MenuPicker,
) -> Result<(String, String), TomoError> {
    loop {
        terminal
            .draw(|frame| render(frame, picker))
            .map_err(|e| TomoError::terminal("draw", e))?;

        let Event::Key(key) = event::read().map_err(|e| TomoError::terminal("event read", e))?
        else {
            continue;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Err(TomoError::MenuAborted);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Err(TomoError::MenuAborted),
            KeyCode::Char('k') | KeyCode::Up => picker.select_previous(),
            KeyCode::Char('j') | KeyCode::Down => picker.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if picker.confirm() {
                    if let Some((work, rest)) = picker.selections() {
                        return Ok((work.to_string(), rest.to_string()));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Render the menu: heading, choice list, key help.
fn render(frame: &mut Frame<'_>, picker: &MenuPicker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(0),    // Choices
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

    render_heading(frame, picker, chunks[0]);
    render_choices(frame, picker, chunks[1]);
    render_help(frame, chunks[2]);
}

fn render_heading(frame: &mut Frame<'_>, picker: &MenuPicker, area: Rect) {
    let heading = Paragraph::new(format!(" {} ", picker.title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(heading, area);
}

fn render_choices(frame: &mut Frame<'_>, picker: &MenuPicker, area: Rect) {
    let items: Vec<ListItem<'_>> = picker
        .choices()
        .iter()
        .map(|label| ListItem::new(*label))
        .collect();

    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(picker.cursor()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let help = Paragraph::new(" j/k:move | Enter:select | q:quit")
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

//! UI rendering for the countdown screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::timer::format::format_mmss;
use crate::timer::{Phase, TimerSession};
use crate::tui::app::App;

/// Render the countdown screen.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, countdown, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Countdown
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let session = app.session();
    render_header(frame, session, chunks[0]);
    render_countdown(frame, session, chunks[1]);
    render_status_bar(frame, session, chunks[2]);
}

/// Color theme per phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Red,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Blue,
        Phase::Finished => Color::DarkGray,
    }
}

/// Render the header: phase label and cycle progress.
fn render_header(frame: &mut Frame<'_>, session: &TimerSession, area: Rect) {
    let title = format!(
        " {} - Cycle {}/{} ",
        session.phase(),
        session.current_cycle(),
        session.total_cycles()
    );

    let color = phase_color(session.phase());
    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time and the phase progress gauge.
fn render_countdown(frame: &mut Frame<'_>, session: &TimerSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Time
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Gauge
            Constraint::Min(0),
        ])
        .split(area);

    let remaining = format_mmss(session.remaining());
    let time = Paragraph::new(format!("Time remaining: {remaining}"))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(time, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(session.phase())))
        .ratio(session.progress());

    frame.render_widget(gauge, chunks[3]);
}

/// Render the status bar: running state and key help.
fn render_status_bar(frame: &mut Frame<'_>, session: &TimerSession, area: Rect) {
    let (label, style) = if session.is_paused() {
        (
            "Paused",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Running", Style::default().fg(Color::DarkGray))
    };

    let status = Paragraph::new(format!(" [{label}] p:pause/resume | q:quit")).style(style);

    frame.render_widget(status, area);
}

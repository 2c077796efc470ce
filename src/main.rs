use chrono::Duration;
use clap::Parser;
use colored::Colorize;

use tomo::alert::AlertSettings;
use tomo::cli::args::Cli;
use tomo::cli::completions;
use tomo::config::Config;
use tomo::error::TomoError;
use tomo::menu;
use tomo::timer::{duration_for, parse_duration, TimerSession};
use tomo::tui::{self, App, SessionOutcome};

fn main() {
    match run() {
        Ok(()) => {}
        // Backing out of the menu is a normal early exit, not a failure.
        Err(TomoError::MenuAborted) => {
            println!("{}", "Selection canceled.".dimmed());
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), TomoError> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print!("{}", completions::generate_completions(shell)?);
        return Ok(());
    }

    let config = Config::load()?;
    let session = build_session(&cli, &config)?;
    let alerts = AlertSettings {
        notifications: config.alerts.notifications && !cli.no_notify,
        sound: config.alerts.sound && !cli.no_sound,
    };

    let mut app = App::new(session, alerts);
    match tui::run(&mut app)? {
        SessionOutcome::Completed => {
            println!("{}", "Pomodoro session completed.".green().bold());
        }
        SessionOutcome::QuitEarly => {
            println!("{}", "Session ended early.".yellow());
        }
    }

    Ok(())
}

/// Resolve phase durations and cycle count from flags, the selection menu,
/// and the config file, in that order of precedence. The menu only runs when
/// a work or short-break duration is still missing.
fn build_session(cli: &Cli, config: &Config) -> Result<TimerSession, TomoError> {
    let work_flag = parse_flag("work", cli.work.as_deref())?;
    let rest_flag = parse_flag("short break", cli.short_break.as_deref())?;

    let (work, short_break) = if let (Some(work), Some(rest)) = (work_flag, rest_flag) {
        (work, rest)
    } else {
        let (work_label, rest_label) = menu::run_selection_menu()?;
        (
            match work_flag {
                Some(d) => d,
                None => duration_for(&work_label)?,
            },
            match rest_flag {
                Some(d) => d,
                None => duration_for(&rest_label)?,
            },
        )
    };

    let long_break = match parse_flag("long break", cli.long_break.as_deref())? {
        Some(d) => d,
        None => Duration::minutes(i64::from(config.timer.long_break_minutes)),
    };

    let cycles = cli.cycles.unwrap_or(config.timer.cycles);

    TimerSession::new(cycles, work, short_break, long_break)
}

/// Parse an optional CLI duration flag.
fn parse_flag(name: &str, value: Option<&str>) -> Result<Option<Duration>, TomoError> {
    value
        .map(|s| {
            parse_duration(s)
                .ok_or_else(|| TomoError::InvalidConfig(format!("invalid {name} duration: {s:?}")))
        })
        .transpose()
}

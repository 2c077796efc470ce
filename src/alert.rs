//! Phase transition alerts.
//!
//! Each transition fires one desktop notification on a detached thread. The
//! thread is never joined: a slow or broken notification server cannot stall
//! the tick loop, and a failed alert is logged to stderr and dropped.

use colored::Colorize;
use notify_rust::{Notification, Urgency};

use crate::error::TomoError;
use crate::timer::{Phase, Transition};

/// Alert behavior, resolved from config and CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct AlertSettings {
    /// Send desktop notifications on transitions.
    pub notifications: bool,
    /// Ask the notification server to play a sound.
    pub sound: bool,
}

/// Fire a transition alert without waiting for it.
pub fn spawn_transition_alert(transition: Transition, settings: AlertSettings) {
    if !settings.notifications {
        return;
    }

    std::thread::spawn(move || {
        if let Err(e) = show_notification(transition, settings.sound) {
            eprintln!("{}: {e}", "warning".yellow().bold());
        }
    });
}

/// Notification summary and body for a transition.
#[must_use]
pub fn notification_text(transition: Transition) -> (&'static str, &'static str) {
    match transition.to {
        Phase::ShortBreak => ("Work period over", "Time for a short break."),
        Phase::LongBreak => ("Work period over", "Great work! Take a longer break."),
        Phase::Work => ("Break over", "Let's focus on your next session."),
        Phase::Finished => ("Pomodoro complete", "All cycles finished. Nice work!"),
    }
}

fn show_notification(transition: Transition, sound: bool) -> Result<(), TomoError> {
    let (summary, body) = notification_text(transition);

    let mut notification = Notification::new();
    notification
        .summary(summary)
        .body(body)
        .appname("tomo")
        .icon("alarm-clock")
        .urgency(Urgency::Normal);

    if sound {
        notification.sound_name("complete");
    }

    notification
        .show()
        .map(|_| ())
        .map_err(|e| TomoError::Playback(e.to_string()))
}

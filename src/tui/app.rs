//! Application state for the countdown screen.

use crate::alert::{self, AlertSettings};
use crate::timer::TimerSession;

/// Driver-side state: the session value plus alert settings.
///
/// The session is replaced wholesale on every event; alerts for any
/// transitions a tick produced are dispatched from here, never from inside
/// the reducer.
pub struct App {
    session: TimerSession,
    alerts: AlertSettings,
}

impl App {
    /// Wrap a freshly created session.
    #[must_use]
    pub const fn new(session: TimerSession, alerts: AlertSettings) -> Self {
        Self { session, alerts }
    }

    /// Current session state.
    #[must_use]
    pub const fn session(&self) -> &TimerSession {
        &self.session
    }

    /// Apply one tick and fire alerts for any transitions it caused.
    pub fn tick(&mut self) {
        let step = self.session.on_tick();
        self.session = step.session;
        for transition in step.transitions {
            alert::spawn_transition_alert(transition, self.alerts);
        }
    }

    /// Toggle pause on the session.
    pub fn toggle_pause(&mut self) {
        self.session = self.session.toggle_pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;
    use chrono::Duration;

    fn silent() -> AlertSettings {
        AlertSettings {
            notifications: false,
            sound: false,
        }
    }

    fn app(cycles: u32, work: i64, short: i64, long: i64) -> App {
        let session = TimerSession::new(
            cycles,
            Duration::seconds(work),
            Duration::seconds(short),
            Duration::seconds(long),
        )
        .unwrap();
        App::new(session, silent())
    }

    #[test]
    fn test_tick_advances_session() {
        let mut app = app(1, 2, 1, 1);
        app.tick();
        assert_eq!(app.session().elapsed(), Duration::seconds(1));
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut app = app(1, 2, 1, 1);
        app.toggle_pause();
        assert!(app.session().is_paused());
        app.toggle_pause();
        assert!(!app.session().is_paused());
    }

    #[test]
    fn test_runs_to_completion() {
        let mut app = app(1, 2, 1, 1);
        for _ in 0..3 {
            assert!(!app.session().is_terminal());
            app.tick();
        }
        assert!(app.session().is_terminal());
        assert_eq!(app.session().phase(), Phase::Finished);
    }
}

//! Pomodoro session state machine.
//!
//! `TimerSession` is a pure value: every event produces a new session instead
//! of mutating shared state, so the whole cycle sequence can be exercised in
//! tests without a terminal attached. The driver owns the only copy and feeds
//! it ticks and pause toggles as they arrive.

use chrono::Duration;

use crate::error::TomoError;

/// Countdown segment the session is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Focused work period.
    Work,
    /// Break between work periods.
    ShortBreak,
    /// Final break after the last work period.
    LongBreak,
    /// All cycles done. Terminal.
    Finished,
}

impl Phase {
    /// Label used by the renderer and notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
            Self::Finished => "Finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single phase change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Phase that just ended.
    pub from: Phase,
    /// Phase that is starting (or `Finished`).
    pub to: Phase,
}

/// Result of applying one tick to a session.
///
/// `transitions` is usually empty or a single entry; zero-length phases can
/// chain several within one tick.
#[derive(Debug, Clone)]
pub struct Step {
    /// The session after the tick.
    pub session: TimerSession,
    /// Phase changes the tick caused, in order.
    pub transitions: Vec<Transition>,
}

/// State of one Pomodoro run: cycle bookkeeping, phase durations, and the
/// countdown position within the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSession {
    total_cycles: u32,
    current_cycle: u32,
    work_duration: Duration,
    short_break_duration: Duration,
    long_break_duration: Duration,
    phase: Phase,
    elapsed: Duration,
    paused: bool,
}

impl TimerSession {
    /// Create a session at the start of its first work phase.
    ///
    /// # Errors
    ///
    /// Returns `TomoError::InvalidConfig` if `total_cycles` is zero or any
    /// duration is negative.
    pub fn new(
        total_cycles: u32,
        work_duration: Duration,
        short_break_duration: Duration,
        long_break_duration: Duration,
    ) -> Result<Self, TomoError> {
        if total_cycles == 0 {
            return Err(TomoError::InvalidConfig(
                "cycle count must be at least 1".to_string(),
            ));
        }

        for (name, duration) in [
            ("work", work_duration),
            ("short break", short_break_duration),
            ("long break", long_break_duration),
        ] {
            if duration < Duration::zero() {
                return Err(TomoError::InvalidConfig(format!(
                    "{name} duration cannot be negative"
                )));
            }
        }

        Ok(Self {
            total_cycles,
            current_cycle: 1,
            work_duration,
            short_break_duration,
            long_break_duration,
            phase: Phase::Work,
            elapsed: Duration::zero(),
            paused: false,
        })
    }

    /// Apply one one-second tick.
    ///
    /// Paused and finished sessions pass through unchanged. Otherwise elapsed
    /// advances by one second, and any phase whose duration is now used up is
    /// left via the transition table, resetting elapsed to zero. The loop
    /// repeats while the new phase is already over (zero-length phases), so
    /// `elapsed < current_duration` holds again by the time this returns.
    #[must_use]
    pub fn on_tick(mut self) -> Step {
        let mut transitions = Vec::new();

        if self.paused || self.phase == Phase::Finished {
            return Step { session: self, transitions };
        }

        self.elapsed = self.elapsed + Duration::seconds(1);

        while self.phase != Phase::Finished && self.elapsed >= self.current_duration() {
            self.elapsed = Duration::zero();
            transitions.push(self.advance_phase());
        }

        Step { session: self, transitions }
    }

    /// Flip the paused flag. Phase and elapsed are untouched.
    #[must_use]
    pub fn toggle_pause(mut self) -> Self {
        self.paused = !self.paused;
        self
    }

    /// True once the session has reached `Finished`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Duration of the phase currently counting down.
    #[must_use]
    pub const fn current_duration(&self) -> Duration {
        match self.phase {
            Phase::Work => self.work_duration,
            Phase::ShortBreak => self.short_break_duration,
            Phase::LongBreak => self.long_break_duration,
            Phase::Finished => Duration::zero(),
        }
    }

    /// Time left in the current phase, clamped to zero.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        (self.current_duration() - self.elapsed).max(Duration::zero())
    }

    /// Fraction of the current phase already spent (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.current_duration().num_seconds();
        if total == 0 {
            return 1.0;
        }
        (self.elapsed.num_seconds() as f64 / total as f64).min(1.0)
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current cycle, 1-based.
    #[must_use]
    pub const fn current_cycle(&self) -> u32 {
        self.current_cycle
    }

    /// Configured number of work/short-break repetitions.
    #[must_use]
    pub const fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    /// Whether ticks are currently being ignored.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time accumulated in the current phase.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Leave the current phase. The cycle counter moves only on
    /// ShortBreak -> Work and is capped by construction: the last Work phase
    /// goes to LongBreak instead of another ShortBreak.
    fn advance_phase(&mut self) -> Transition {
        let from = self.phase;
        self.phase = match self.phase {
            Phase::Work if self.current_cycle < self.total_cycles => Phase::ShortBreak,
            Phase::Work => Phase::LongBreak,
            Phase::ShortBreak => {
                self.current_cycle += 1;
                Phase::Work
            }
            Phase::LongBreak | Phase::Finished => Phase::Finished,
        };
        Transition { from, to: self.phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(cycles: u32, work: i64, short: i64, long: i64) -> TimerSession {
        TimerSession::new(
            cycles,
            Duration::seconds(work),
            Duration::seconds(short),
            Duration::seconds(long),
        )
        .unwrap()
    }

    /// Tick until terminal, recording every transition. Bails out if the
    /// session never finishes.
    fn run_to_end(mut s: TimerSession) -> (u32, Vec<Transition>) {
        let mut ticks = 0;
        let mut all = Vec::new();
        while !s.is_terminal() {
            let step = s.on_tick();
            s = step.session;
            all.extend(step.transitions);
            ticks += 1;
            assert!(ticks < 10_000, "session never finished");
        }
        (ticks, all)
    }

    #[test]
    fn test_new_starts_at_work_cycle_one() {
        let s = session(4, 1500, 300, 900);
        assert_eq!(s.phase(), Phase::Work);
        assert_eq!(s.current_cycle(), 1);
        assert_eq!(s.elapsed(), Duration::zero());
        assert!(!s.is_paused());
        assert!(!s.is_terminal());
    }

    #[test]
    fn test_new_rejects_zero_cycles() {
        let result = TimerSession::new(
            0,
            Duration::seconds(1),
            Duration::seconds(1),
            Duration::seconds(1),
        );
        assert!(matches!(result, Err(TomoError::InvalidConfig(_))));
    }

    #[test]
    fn test_new_rejects_negative_duration() {
        let result = TimerSession::new(
            1,
            Duration::seconds(-5),
            Duration::seconds(1),
            Duration::seconds(1),
        );
        assert!(matches!(result, Err(TomoError::InvalidConfig(_))));
    }

    #[test]
    fn test_work_ticks_into_short_break() {
        let mut s = session(4, 3, 300, 900);

        for _ in 0..2 {
            let step = s.on_tick();
            assert!(step.transitions.is_empty());
            s = step.session;
        }
        assert_eq!(s.phase(), Phase::Work);

        let step = s.on_tick();
        assert_eq!(
            step.transitions,
            vec![Transition { from: Phase::Work, to: Phase::ShortBreak }]
        );
        assert_eq!(step.session.phase(), Phase::ShortBreak);
        assert_eq!(step.session.elapsed(), Duration::zero());
    }

    #[test]
    fn test_final_work_goes_to_long_break() {
        let mut s = session(1, 2, 300, 60);

        s = s.on_tick().session;
        let step = s.on_tick();
        assert_eq!(
            step.transitions,
            vec![Transition { from: Phase::Work, to: Phase::LongBreak }]
        );
    }

    #[test]
    fn test_short_break_increments_cycle() {
        let mut s = session(2, 1, 1, 1);

        s = s.on_tick().session; // Work -> ShortBreak
        assert_eq!(s.current_cycle(), 1);

        let step = s.on_tick(); // ShortBreak -> Work
        assert_eq!(
            step.transitions,
            vec![Transition { from: Phase::ShortBreak, to: Phase::Work }]
        );
        assert_eq!(step.session.current_cycle(), 2);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut s = session(4, 10, 5, 15);
        s = s.on_tick().session;
        assert_eq!(s.elapsed(), Duration::seconds(1));

        s = s.toggle_pause();
        for _ in 0..5 {
            let step = s.on_tick();
            assert!(step.transitions.is_empty());
            s = step.session;
        }
        assert_eq!(s.elapsed(), Duration::seconds(1));
        assert_eq!(s.phase(), Phase::Work);

        // Resuming picks up exactly where it left off.
        s = s.toggle_pause();
        s = s.on_tick().session;
        assert_eq!(s.elapsed(), Duration::seconds(2));
    }

    #[test]
    fn test_double_toggle_restores_pause_state() {
        let s = session(4, 10, 5, 15);
        assert!(!s.is_paused());
        let s = s.toggle_pause().toggle_pause();
        assert!(!s.is_paused());
    }

    #[test]
    fn test_single_cycle_scenario() {
        // cycles=1, work=2, long=1: Work(2) -> LongBreak(1) -> Finished,
        // three ticks in total and no short break.
        let s = session(1, 2, 300, 1);
        let (ticks, transitions) = run_to_end(s);

        assert_eq!(ticks, 3);
        assert_eq!(
            transitions,
            vec![
                Transition { from: Phase::Work, to: Phase::LongBreak },
                Transition { from: Phase::LongBreak, to: Phase::Finished },
            ]
        );
    }

    #[test]
    fn test_two_cycle_scenario() {
        // cycles=2, all durations one tick:
        // Work -> ShortBreak -> Work -> LongBreak -> Finished,
        // cycle progression 1 -> 1 -> 2 -> 2.
        let mut s = session(2, 1, 1, 1);
        let mut seen = vec![(s.phase(), s.current_cycle())];

        while !s.is_terminal() {
            let step = s.on_tick();
            s = step.session;
            for t in step.transitions {
                seen.push((t.to, s.current_cycle()));
            }
        }

        assert_eq!(
            seen,
            vec![
                (Phase::Work, 1),
                (Phase::ShortBreak, 1),
                (Phase::Work, 2),
                (Phase::LongBreak, 2),
                (Phase::Finished, 2),
            ]
        );
    }

    #[test]
    fn test_cycle_never_exceeds_total() {
        let mut s = session(4, 2, 1, 3);
        while !s.is_terminal() {
            s = s.on_tick().session;
            assert!(s.current_cycle() <= s.total_cycles());
        }
        assert_eq!(s.current_cycle(), 4);
    }

    #[test]
    fn test_full_run_phase_counts() {
        // totalCycles work phases, totalCycles - 1 short breaks, one long break.
        for cycles in [1, 4] {
            let s = session(cycles, 2, 1, 3);
            let (_, transitions) = run_to_end(s);

            let work_exits = transitions
                .iter()
                .filter(|t| t.from == Phase::Work)
                .count();
            let short_exits = transitions
                .iter()
                .filter(|t| t.from == Phase::ShortBreak)
                .count();
            let long_exits = transitions
                .iter()
                .filter(|t| t.from == Phase::LongBreak)
                .count();

            assert_eq!(work_exits, cycles as usize);
            assert_eq!(short_exits, cycles as usize - 1);
            assert_eq!(long_exits, 1);
        }
    }

    #[test]
    fn test_zero_length_phase_cascades_in_one_tick() {
        // Long break of zero seconds: finishing work also finishes the run.
        let mut s = session(1, 1, 300, 0);
        let step = s.on_tick();
        s = step.session;

        assert_eq!(
            step.transitions,
            vec![
                Transition { from: Phase::Work, to: Phase::LongBreak },
                Transition { from: Phase::LongBreak, to: Phase::Finished },
            ]
        );
        assert!(s.is_terminal());
    }

    #[test]
    fn test_finished_session_ignores_ticks() {
        let mut s = session(1, 1, 1, 1);
        while !s.is_terminal() {
            s = s.on_tick().session;
        }

        let step = s.on_tick();
        assert!(step.transitions.is_empty());
        assert_eq!(step.session, s);
        assert_eq!(step.session.remaining(), Duration::zero());
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut s = session(4, 5, 1, 1);
        assert_eq!(s.remaining(), Duration::seconds(5));
        s = s.on_tick().session;
        assert_eq!(s.remaining(), Duration::seconds(4));
    }

    #[test]
    fn test_progress_bounds() {
        let mut s = session(4, 4, 1, 1);
        assert!((s.progress() - 0.0).abs() < f64::EPSILON);
        s = s.on_tick().session;
        s = s.on_tick().session;
        assert!((s.progress() - 0.5).abs() < 0.01);
    }
}

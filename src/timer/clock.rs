//! One-second tick scheduling for the event loop.
//!
//! The loop multiplexes input and time with `crossterm::event::poll`; this
//! clock owns the tick deadline and turns it into poll timeouts. Ticks are
//! never queued: if the consumer falls behind, the next deadline snaps
//! forward so at most one tick is pending.

use std::time::{Duration, Instant};

/// Deadline tracker for a repeating tick.
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    next: Instant,
}

impl TickClock {
    /// Create a clock whose first tick is one interval from now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    /// How long the event poll may wait before the next tick is due.
    ///
    /// Zero once the deadline has passed, so a busy consumer services the
    /// tick on its next iteration instead of blocking.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Whether the tick deadline has been reached.
    #[must_use]
    pub fn is_due(&self) -> bool {
        Instant::now() >= self.next
    }

    /// Consume the due tick and schedule the next one.
    ///
    /// Deadlines advance by whole intervals; if more than one interval has
    /// passed, the missed ticks coalesce into a single deadline one interval
    /// from now rather than firing back-to-back.
    pub fn advance(&mut self) {
        let now = Instant::now();
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }
}

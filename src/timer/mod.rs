//! Pomodoro countdown core.
//!
//! The state machine, its one-second clock, duration presets, and the
//! formatting helpers shared by the TUI:
//! - Pure-value session reducer (tick, pause toggle, transitions)
//! - Poll-deadline tick clock with coalescing
//! - Menu label to duration lookup
//! - Duration parsing and MM:SS formatting

pub mod clock;
pub mod format;
pub mod presets;
pub mod session;

pub use clock::TickClock;
pub use format::{format_mmss, parse_duration};
pub use presets::{duration_for, REST_CHOICES, WORK_CHOICES};
pub use session::{Phase, Step, TimerSession, Transition};

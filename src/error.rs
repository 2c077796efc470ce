//! Error types for tomo.
//!
//! One enum covers every failure the binary can surface. Alert playback
//! failures are recovered where they occur and never reach the exit code.

use thiserror::Error;

/// Errors that can occur while running tomo.
#[derive(Debug, Error)]
pub enum TomoError {
    /// Timer construction was given unusable values.
    #[error("invalid timer configuration: {0}")]
    InvalidConfig(String),

    /// A menu label had no entry in the duration table.
    #[error("unknown duration selection: {0:?}")]
    InvalidSelection(String),

    /// The user backed out of the selection menu before choosing.
    #[error("selection menu aborted")]
    MenuAborted,

    /// Desktop notification or sound playback failed.
    #[error("notification playback failed: {0}")]
    Playback(String),

    /// Configuration file could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or event I/O failed, tagged with the stage that failed.
    #[error("terminal failure during {stage}: {source}")]
    Terminal {
        /// Which part of the loop was running (e.g. "event poll", "draw").
        stage: &'static str,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TomoError {
    /// Wrap a terminal I/O error with the stage that produced it.
    #[must_use]
    pub const fn terminal(stage: &'static str, source: std::io::Error) -> Self {
        Self::Terminal { stage, source }
    }
}

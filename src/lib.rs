//! tomo - a Pomodoro timer for the terminal
//!
//! This crate provides a cyclic work/break countdown with a selection menu,
//! pause/resume, and desktop notifications on phase transitions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod timer;
pub mod tui;

pub use cli::args::Cli;
pub use error::TomoError;
pub use timer::{Phase, TimerSession};

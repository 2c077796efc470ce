//! Configuration management for tomo.
//!
//! This module handles loading and saving configuration from `~/.tomo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AlertConfig, Config, TimerConfig};

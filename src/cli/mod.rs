//! Command-line interface for tomo.

pub mod args;
pub mod completions;

//! Subcommand implementations.

pub mod chart;
pub mod compare;
pub mod export;

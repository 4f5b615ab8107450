//! CLI subcommand implementations.

pub mod clear;
pub mod confirm;
pub mod propose;
pub mod util;
pub mod week;

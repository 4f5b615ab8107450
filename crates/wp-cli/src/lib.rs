//! Weekly meeting planner CLI library.
//!
//! This crate provides the CLI interface for the week planner.

mod cli;
pub mod commands;
mod config;
pub mod events_file;

pub use cli::{Cli, Commands};
pub use config::Config;

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Multi-participant weekly meeting planner.
///
/// Combines several people's calendars into one weekly grid and lets you
/// propose and confirm a shared meeting slot.
#[derive(Debug, Parser)]
#[command(name = "wp", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the combined week layout.
    Week {
        /// Any date in the week to show (e.g., 2025-01-29, "next week").
        #[arg(long, default_value = "today")]
        date: String,

        /// Comma-separated participant IDs (defaults to the configured selection).
        #[arg(long, value_delimiter = ',')]
        participants: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Propose a meeting, replacing any previous proposal.
    Propose {
        /// Meeting title.
        #[arg(long)]
        title: String,

        /// Meeting date (e.g., 2025-01-29).
        #[arg(long)]
        date: String,

        /// Start time (HH:MM).
        #[arg(long, default_value = "10:00")]
        time: String,

        /// Duration in minutes.
        #[arg(long, default_value_t = 60)]
        duration: i64,

        /// Comma-separated participant IDs (defaults to the configured selection).
        #[arg(long, value_delimiter = ',')]
        participants: Vec<String>,
    },

    /// Confirm the proposed meeting and send invitations.
    Confirm {
        /// Comma-separated participant IDs (defaults to the configured selection).
        #[arg(long, value_delimiter = ',')]
        participants: Vec<String>,
    },

    /// Remove the proposed and confirmed meeting.
    Clear,
}

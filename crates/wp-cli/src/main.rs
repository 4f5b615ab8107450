use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wp_cli::commands::confirm::LoggingInvitationSender;
use wp_cli::commands::util::{parse_date, parse_time};
use wp_cli::commands::{clear, confirm, propose, week};
use wp_cli::events_file::JsonFileSource;
use wp_cli::{Cli, Commands, Config};
use wp_core::MeetingRequest;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Week {
            date,
            participants,
            json,
        } => {
            let reference = parse_date(date)?;
            let source = JsonFileSource::new(&config.events_path);
            week::run(&mut stdout, &config, &source, reference, participants, *json)?;
        }
        Commands::Propose {
            title,
            date,
            time,
            duration,
            participants,
        } => {
            let request = MeetingRequest {
                title: title.clone(),
                date: parse_date(date)?,
                time: parse_time(time)?,
                duration_minutes: *duration,
            };
            propose::run(&mut stdout, &config, &request, participants)?;
        }
        Commands::Confirm { participants } => {
            confirm::run(&mut stdout, &config, &LoggingInvitationSender, participants)?;
        }
        Commands::Clear => {
            clear::run(&mut stdout, &config)?;
        }
    }

    Ok(())
}

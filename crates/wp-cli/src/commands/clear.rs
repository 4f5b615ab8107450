//! Clear command: drop the proposed and confirmed meeting.

use std::io::Write;

use anyhow::{Context, Result};
use wp_core::meeting::clear_meeting;

use crate::Config;
use crate::events_file::{load_events, save_events};

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let mut events = load_events(&config.events_path)
        .with_context(|| format!("failed to read {}", config.events_path.display()))?;

    let removed = clear_meeting(&mut events);
    if removed == 0 {
        writeln!(writer, "No meeting to clear")?;
        return Ok(());
    }

    save_events(&config.events_path, &events)?;
    tracing::info!(removed, "meeting cleared");
    writeln!(writer, "Cleared {removed} meeting event(s)")?;
    Ok(())
}

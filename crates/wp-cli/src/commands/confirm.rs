//! Confirm command: promote the proposal and send invitations.

use std::convert::Infallible;
use std::io::Write;

use anyhow::{Context, Result};
use wp_core::meeting::{confirm, proposed};
use wp_core::{CalendarEvent, InvitationSender, Participant};

use super::util::resolve_participants;
use crate::Config;
use crate::events_file::{load_events, save_events};

/// Records invitations in the log instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingInvitationSender;

impl InvitationSender for LoggingInvitationSender {
    type Error = Infallible;

    fn send(&self, meeting: &CalendarEvent, participants: &[&Participant]) -> Result<(), Infallible> {
        for participant in participants {
            tracing::info!(
                meeting = %meeting.id,
                participant = %participant.id,
                address = participant.invitation_address(),
                "invitation sent"
            );
        }
        Ok(())
    }
}

pub fn run<W, S>(writer: &mut W, config: &Config, sender: &S, participants: &[String]) -> Result<()>
where
    W: Write,
    S: InvitationSender,
    S::Error: Send + Sync + 'static,
{
    let selected = resolve_participants(&config.participants, config, participants)?;
    let mut events = load_events(&config.events_path)
        .with_context(|| format!("failed to read {}", config.events_path.display()))?;

    // The proposal stays in place until invitations are out, so a failed
    // send can be retried.
    let proposal = proposed(&events)
        .cloned()
        .context("no meeting has been proposed; run `wp propose` first")?;
    sender
        .send(&proposal, &selected)
        .context("failed to send invitations")?;

    let meeting = confirm(&mut events)
        .cloned()
        .context("no meeting has been proposed")?;
    save_events(&config.events_path, &events)?;
    tracing::info!(id = %meeting.id, "meeting confirmed");

    writeln!(
        writer,
        "Confirmed {} on {} {}-{}",
        meeting.title,
        meeting.start.format("%Y-%m-%d"),
        meeting.start.format("%H:%M"),
        meeting.end.format("%H:%M"),
    )?;
    let addresses: Vec<_> = selected.iter().map(|p| p.invitation_address()).collect();
    if !addresses.is_empty() {
        writeln!(writer, "Invited: {}", addresses.join(", "))?;
    }
    Ok(())
}

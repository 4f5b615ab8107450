//! Boundaries to the calendar provider and the invitation channel.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::CalendarEvent;
use crate::roster::Participant;

/// Why a calendar source could not supply events.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read events from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event data")]
    Parse(#[from] serde_json::Error),

    #[error("calendar provider unavailable: {0}")]
    Unavailable(String),
}

/// Something that can supply raw events for a set of participants.
///
/// This allows the planner to read from a provider API, a local snapshot, or
/// test fixtures.
pub trait CalendarSource {
    /// Events for `participants` in the week starting on `week_start`.
    ///
    /// Participants with no events simply contribute nothing. Meeting
    /// pseudo-owner events are included regardless of the selection.
    fn fetch(
        &self,
        participants: &[&Participant],
        week_start: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, SourceError>;
}

/// Fetches events, treating any source failure as an empty calendar.
pub fn fetch_or_empty<S: CalendarSource + ?Sized>(
    source: &S,
    participants: &[&Participant],
    week_start: NaiveDate,
) -> Vec<CalendarEvent> {
    match source.fetch(participants, week_start) {
        Ok(events) => events,
        Err(err) => {
            tracing::warn!(error = %err, %week_start, "calendar source failed; showing an empty week");
            Vec::new()
        }
    }
}

/// Delivers invitations for a confirmed meeting.
pub trait InvitationSender {
    type Error: std::error::Error;

    fn send(&self, meeting: &CalendarEvent, participants: &[&Participant])
    -> Result<(), Self::Error>;
}

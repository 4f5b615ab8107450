//! Proposing and confirming the shared meeting.
//!
//! At most one proposal exists at a time. Confirming it turns it into an
//! ordinary event owned by the confirmed-meeting pseudo-owner; both are laid
//! out like any other event once merged into the event list.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;
use crate::roster::Participant;
use crate::types::{EventId, OwnerId, ValidationError};

/// What the operator entered for a new meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i64,
}

impl MeetingRequest {
    /// Builds the proposed meeting event for the selected participants.
    pub fn propose(&self, participants: &[&Participant]) -> Result<CalendarEvent, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if participants.is_empty() {
            return Err(ValidationError::NoParticipants);
        }
        if self.duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveDuration {
                minutes: self.duration_minutes,
            });
        }

        let start = self.date.and_time(self.time);
        let end = start + Duration::minutes(self.duration_minutes);
        let id = EventId::new(format!("meeting-{}", uuid::Uuid::new_v4()))?;

        let names: Vec<_> = participants.iter().map(|p| p.name.as_str()).collect();
        let mut event = CalendarEvent::new(id, OwnerId::proposed(), title, start, end);
        event.description = Some(format!("Participants: {}", names.join(", ")));
        Ok(event)
    }
}

/// The current proposal, if any.
pub fn proposed(events: &[CalendarEvent]) -> Option<&CalendarEvent> {
    events.iter().find(|e| e.owner_id.is_proposed())
}

/// Replaces any existing proposal with `proposal`.
pub fn merge_proposal(events: &mut Vec<CalendarEvent>, proposal: CalendarEvent) {
    events.retain(|e| !e.owner_id.is_proposed());
    events.push(proposal);
}

/// Marks the current proposal as confirmed and returns it.
///
/// Returns `None` when nothing has been proposed.
pub fn confirm(events: &mut [CalendarEvent]) -> Option<&CalendarEvent> {
    let meeting = events.iter_mut().find(|e| e.owner_id.is_proposed())?;
    meeting.owner_id = OwnerId::confirmed();
    Some(meeting)
}

/// Removes the proposed and confirmed meetings. Returns how many were removed.
pub fn clear_meeting(events: &mut Vec<CalendarEvent>) -> usize {
    let before = events.len();
    events.retain(|e| !e.owner_id.is_meeting());
    before - events.len()
}

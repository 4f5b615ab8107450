//! Calendar events as supplied by a participant's calendar.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::{EventId, OwnerId};

/// A scheduled interval on someone's calendar.
///
/// Timestamps are wall-clock times in the viewer's timezone. `end > start`
/// is expected but not enforced; the layout engine tolerates degenerate
/// intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Identifier, unique per owner.
    pub id: EventId,
    /// Display text.
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Participant (or meeting pseudo-owner) the event belongs to.
    pub owner_id: OwnerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Creates an event with no description or location.
    pub fn new(
        id: EventId,
        owner_id: OwnerId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            owner_id,
            description: None,
            location: None,
        }
    }

    /// Calendar date the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Calendar date the event ends on.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Signed duration; negative when the event ends before it starts.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// End time clamped so it never precedes the start.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end.max(self.start)
    }

    /// True when the half-open intervals `[start, end)` intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.effective_end() && other.start < self.effective_end()
    }

    /// Key that is unique across owners, for use when rendering lists.
    pub fn render_key(&self) -> String {
        format!("{}:{}", self.owner_id, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, event};

    #[test]
    fn event_serialization_roundtrip() {
        let mut original = event("standup", "2025-01-27T09:00", "2025-01-27T09:15");
        original.location = Some("Room 101".into());

        let json = serde_json::to_string(&original).unwrap();
        let parsed: CalendarEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, original);
        assert!(!json.contains("description"));
    }

    #[test]
    fn event_rejects_empty_owner() {
        let json = r#"{
            "id": "evt-1",
            "title": "Lunch",
            "start": "2025-01-27T12:00:00",
            "end": "2025-01-27T13:00:00",
            "owner_id": ""
        }"#;
        let result: Result<CalendarEvent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn event_rejects_malformed_timestamp() {
        let json = r#"{
            "id": "evt-1",
            "title": "Lunch",
            "start": "tomorrow at noon",
            "end": "2025-01-27T13:00:00",
            "owner_id": "user-1"
        }"#;
        let result: Result<CalendarEvent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn render_key_combines_owner_and_id() {
        let a = event("evt-1", "2025-01-27T09:00", "2025-01-27T10:00");
        let mut b = a.clone();
        b.owner_id = OwnerId::new("user-2").unwrap();

        assert_eq!(a.render_key(), "user-1:evt-1");
        assert_ne!(a.render_key(), b.render_key());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = event("a", "2025-01-27T09:00", "2025-01-27T10:00");
        let b = event("b", "2025-01-27T10:00", "2025-01-27T11:00");
        let c = event("c", "2025-01-27T09:30", "2025-01-27T10:30");

        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn effective_end_clamps_inverted_events() {
        let inverted = event("x", "2025-01-27T11:00", "2025-01-27T10:00");
        assert_eq!(inverted.effective_end(), at("2025-01-27T11:00"));
        assert!(inverted.duration() < Duration::zero());
    }
}

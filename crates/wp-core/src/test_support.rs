//! Fixtures shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::CalendarEvent;
use crate::roster::{Participant, Roster};
use crate::types::{EventId, OwnerId};

/// Parses `YYYY-MM-DDTHH:MM` into a wall-clock timestamp.
pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid test timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// An event owned by `user-1`, titled after its ID.
pub fn event(id: &str, start: &str, end: &str) -> CalendarEvent {
    owned_event(id, "user-1", start, end)
}

pub fn owned_event(id: &str, owner: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent::new(
        EventId::new(id).unwrap(),
        OwnerId::new(owner).unwrap(),
        id,
        at(start),
        at(end),
    )
}

/// Two participants, one with a separate invitation address.
pub fn sample_roster() -> Roster {
    Roster::new(vec![
        Participant {
            id: OwnerId::new("user-1").unwrap(),
            name: "Anna".into(),
            color: "blue".into(),
            calendar_id: "anna@example.com".into(),
            invitation_calendar_id: None,
        },
        Participant {
            id: OwnerId::new("user-2").unwrap(),
            name: "Jacek".into(),
            color: "red".into(),
            calendar_id: "import-123@calendar.example.com".into(),
            invitation_calendar_id: Some("jacek@example.com".into()),
        },
    ])
}

//! Participants whose calendars can be combined.
//!
//! The roster is plain configuration passed to whoever renders the week; the
//! layout engine itself only ever sees opaque owner IDs.

use serde::{Deserialize, Serialize};

use crate::types::OwnerId;

/// Colour used for a confirmed meeting.
pub const CONFIRMED_COLOR: &str = "green";

/// Colour used for owners that are not in the roster, including the
/// proposed meeting.
pub const FALLBACK_COLOR: &str = "fuchsia";

/// Someone whose calendar can be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: OwnerId,
    pub name: String,
    /// Display colour name.
    pub color: String,
    /// Calendar the participant's events are read from.
    pub calendar_id: String,
    /// Address invitations go to, when it differs from `calendar_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_calendar_id: Option<String>,
}

impl Participant {
    /// Where invitations for this participant are delivered.
    pub fn invitation_address(&self) -> &str {
        self.invitation_calendar_id
            .as_deref()
            .unwrap_or(&self.calendar_id)
    }
}

/// Ordered list of known participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Participant>);

impl Roster {
    pub const fn new(participants: Vec<Participant>) -> Self {
        Self(participants)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.0
    }

    pub fn get(&self, owner: &OwnerId) -> Option<&Participant> {
        self.0.iter().find(|p| &p.id == owner)
    }

    /// Participants whose IDs appear in `ids`, in roster order. Unknown IDs
    /// are skipped.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Participant> {
        self.0
            .iter()
            .filter(|p| ids.iter().any(|id| id.as_ref() == p.id.as_str()))
            .collect()
    }

    /// Human-readable name for an event owner.
    pub fn label<'a>(&'a self, owner: &'a OwnerId) -> &'a str {
        if owner.is_proposed() {
            return "Proposed meeting";
        }
        if owner.is_confirmed() {
            return "Confirmed meeting";
        }
        self.get(owner).map_or(owner.as_str(), |p| p.name.as_str())
    }

    /// Display colour for an event owner.
    pub fn color(&self, owner: &OwnerId) -> &str {
        if owner.is_confirmed() {
            return CONFIRMED_COLOR;
        }
        self.get(owner).map_or(FALLBACK_COLOR, |p| p.color.as_str())
    }
}

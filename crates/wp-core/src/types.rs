//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A meeting must last at least one minute.
    #[error("meeting duration must be positive, got {minutes} minutes")]
    NonPositiveDuration { minutes: i64 },

    /// A meeting needs someone to meet with.
    #[error("at least one participant must be selected")]
    NoParticipants,
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated calendar event identifier.
    ///
    /// Unique within one owner's events. Two owners may share an ID, so anything
    /// that needs a globally unique key should combine it with the owner.
    EventId, "event ID"
);

define_string_id!(
    /// Identifies who an event belongs to.
    ///
    /// Usually a participant ID from the roster, or one of the pseudo-owners
    /// used for the meeting being planned.
    OwnerId, "owner ID"
);

/// Owner of a meeting that has been proposed but not yet confirmed.
pub const PROPOSED_OWNER: &str = "meeting-proposal";

/// Owner of a meeting whose invitations have been sent.
pub const CONFIRMED_OWNER: &str = "confirmed-meeting";

impl OwnerId {
    /// The pseudo-owner for a proposed meeting.
    pub fn proposed() -> Self {
        Self(PROPOSED_OWNER.to_string())
    }

    /// The pseudo-owner for a confirmed meeting.
    pub fn confirmed() -> Self {
        Self(CONFIRMED_OWNER.to_string())
    }

    pub fn is_proposed(&self) -> bool {
        self.0 == PROPOSED_OWNER
    }

    pub fn is_confirmed(&self) -> bool {
        self.0 == CONFIRMED_OWNER
    }

    /// True for the meeting pseudo-owners, which are not roster participants.
    pub fn is_meeting(&self) -> bool {
        self.is_proposed() || self.is_confirmed()
    }
}

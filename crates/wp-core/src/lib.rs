//! Core domain logic for the weekly meeting planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Layout: bucketing events by day, packing overlapping timed events into
//!   columns, stacking all-day banners, and projecting them onto the day grid
//! - Meetings: proposing and confirming the shared meeting slot
//! - Roster: participant names and colours for display
//!
//! The layout pipeline is pure. It borrows an event snapshot and returns a
//! derived [`WeekLayout`] without performing I/O.

mod all_day;
mod bucket;
mod classify;
mod event;
mod geometry;
pub mod meeting;
mod pack;
mod positioned;
pub mod roster;
pub mod source;
mod types;
mod week;

#[cfg(test)]
mod test_support;

pub use all_day::stack_all_day;
pub use bucket::{DayBuckets, bucket, occupied_days};
pub use classify::{EventClass, classify};
pub use event::CalendarEvent;
pub use geometry::{DayWindow, Layout, hour_of_day, project, project_all_day};
pub use meeting::MeetingRequest;
pub use pack::{Placement, assign_columns, pack};
pub use positioned::{PositionedEvent, Slot};
pub use roster::{Participant, Roster};
pub use source::{CalendarSource, InvitationSender, SourceError, fetch_or_empty};
pub use types::{CONFIRMED_OWNER, EventId, OwnerId, PROPOSED_OWNER, ValidationError};
pub use week::{WeekLayout, day_key, layout_day, layout_week, week_days, week_start};

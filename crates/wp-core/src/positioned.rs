//! Render-ready events.

use serde::Serialize;

use crate::classify::EventClass;
use crate::event::CalendarEvent;
use crate::geometry::Layout;

/// Where an event sits within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    /// A timed event's column within its collision group.
    Column {
        index: usize,
        /// Columns used by the collision group.
        total: usize,
    },
    /// An all-day event's row within its overlap group.
    Row {
        index: usize,
        /// Rows used by the overlap group.
        total: usize,
    },
}

/// An event occurrence on one day, with its computed geometry.
///
/// The event itself is borrowed from the caller's snapshot and never
/// modified; a multi-day event yields one `PositionedEvent` per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent<'a> {
    #[serde(flatten)]
    pub event: &'a CalendarEvent,
    pub slot: Slot,
    pub layout: Layout,
}

impl PositionedEvent<'_> {
    pub const fn class(&self) -> EventClass {
        match self.slot {
            Slot::Column { .. } => EventClass::Timed,
            Slot::Row { .. } => EventClass::AllDay,
        }
    }

    /// Column (timed) or row (all-day) index.
    pub const fn index(&self) -> usize {
        match self.slot {
            Slot::Column { index, .. } | Slot::Row { index, .. } => index,
        }
    }

    /// Columns (timed) or rows (all-day) in the event's group.
    pub const fn total(&self) -> usize {
        match self.slot {
            Slot::Column { total, .. } | Slot::Row { total, .. } => total,
        }
    }
}

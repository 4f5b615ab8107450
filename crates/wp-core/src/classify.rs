//! Deciding whether an event renders as an all-day banner or a timed block.

use std::fmt;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;

/// How an event is laid out within a day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventClass {
    /// Positioned proportionally to its time of day, possibly sharing width.
    Timed,
    /// Full-width banner stacked above the time grid.
    AllDay,
}

impl EventClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timed => "timed",
            Self::AllDay => "all_day",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an event for layout.
///
/// An event is all-day when it runs from exactly 00:00 to 23:59 (seconds
/// ignored), or when its end date is later than its start date. The result
/// is the same for every day bucket the event lands in, so a multi-day
/// event stays a banner even on days where its clipped portion would look
/// like an ordinary meeting.
pub fn classify(event: &CalendarEvent) -> EventClass {
    let spans_whole_day = event.start.hour() == 0
        && event.start.minute() == 0
        && event.end.hour() == 23
        && event.end.minute() == 59;
    let spans_multiple_days = event.end_date() > event.start_date();

    if spans_whole_day || spans_multiple_days {
        EventClass::AllDay
    } else {
        EventClass::Timed
    }
}

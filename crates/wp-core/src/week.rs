//! The full layout pipeline for one visible week.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::all_day::stack_all_day;
use crate::bucket::bucket;
use crate::classify::{EventClass, classify};
use crate::event::CalendarEvent;
use crate::geometry::DayWindow;
use crate::pack::pack;
use crate::positioned::PositionedEvent;

/// Monday of the week containing `reference`.
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    let days_since_monday = reference.weekday().num_days_from_monday();
    reference - Duration::days(i64::from(days_since_monday))
}

/// The seven dates (Monday through Sunday) of the week containing `reference`.
pub fn week_days(reference: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    week_start(reference).iter_days().take(7)
}

/// ISO `YYYY-MM-DD` key for a calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Positioned events for every day of one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout<'a> {
    pub week_start: NaiveDate,
    /// One entry per day of the week, Monday first. Days without events map
    /// to an empty list.
    pub days: BTreeMap<NaiveDate, Vec<PositionedEvent<'a>>>,
}

impl<'a> WeekLayout<'a> {
    /// Events positioned on `day`; empty for days outside this week.
    pub fn day(&self, day: NaiveDate) -> &[PositionedEvent<'a>] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// True when no day has anything to draw.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    pub fn positioned_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Lays out the events of one day: timed blocks first, then all-day banners.
pub fn layout_day<'a>(
    events: &[&'a CalendarEvent],
    window: &DayWindow,
) -> Vec<PositionedEvent<'a>> {
    let (all_day, timed): (Vec<&'a CalendarEvent>, Vec<&'a CalendarEvent>) = events
        .iter()
        .copied()
        .partition(|event| classify(event) == EventClass::AllDay);

    let mut positioned = pack(&timed, window);
    positioned.extend(stack_all_day(&all_day, window));
    positioned
}

/// Lays out `events` for the Monday-aligned week containing `reference`.
///
/// This is a pure function of its inputs: the events are only borrowed, and
/// calling it again with the same snapshot yields an identical layout.
pub fn layout_week<'a>(
    events: &'a [CalendarEvent],
    reference: NaiveDate,
    window: &DayWindow,
) -> WeekLayout<'a> {
    let start = week_start(reference);
    let buckets = bucket(events);

    let days: BTreeMap<_, _> = week_days(start)
        .map(|day| {
            let positioned = buckets
                .get(&day)
                .map(|day_events| layout_day(day_events, window))
                .unwrap_or_default();
            (day, positioned)
        })
        .collect();

    let layout = WeekLayout {
        week_start: start,
        days,
    };
    tracing::debug!(
        week_start = %start,
        events = events.len(),
        positioned = layout.positioned_count(),
        "computed week layout"
    );
    layout
}

//! Interval packing for timed events.
//!
//! # Algorithm Summary
//!
//! 1. Sort by start time; ties go to the longer event first so it claims the
//!    leftmost column, then to input order.
//! 2. Place each event in the lowest-indexed column whose occupant has ended
//!    by the time this event starts, opening a new column if none is free.
//! 3. An event whose start is before the running maximum end of the current
//!    collision group joins it; otherwise it starts a new group. Every event
//!    in a group shares the group's column count.
//! 4. Events that fall entirely outside the day window are dropped after
//!    columns are assigned, so they never shift the layout of visible events.

use std::cmp::Reverse;

use chrono::NaiveDateTime;

use crate::event::CalendarEvent;
use crate::geometry::{self, DayWindow, hour_of_day};
use crate::positioned::{PositionedEvent, Slot};

/// Column assignment for one timed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub event: &'a CalendarEvent,
    /// Collision group ordinal within the day, starting at 0.
    pub group: usize,
    pub column: usize,
    /// Number of columns the group needs.
    pub total_columns: usize,
}

/// Assigns columns to one day's timed events.
///
/// Returned placements are in sorted order. No two overlapping events share
/// a column, and each group's column count equals its peak concurrency.
pub fn assign_columns<'a>(events: &[&'a CalendarEvent]) -> Vec<Placement<'a>> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.start, Reverse(e.effective_end() - e.start)));

    let mut placements: Vec<Placement<'a>> = Vec::with_capacity(sorted.len());
    // End time of the latest occupant of each column in the current group.
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut group = 0;
    let mut group_first = 0;
    let mut group_end: Option<NaiveDateTime> = None;

    for event in sorted {
        let end = event.effective_end();

        if group_end.is_some_and(|group_end| event.start >= group_end) {
            close_group(&mut placements[group_first..], column_ends.len());
            group += 1;
            group_first = placements.len();
            column_ends.clear();
            group_end = None;
        }

        let column = if let Some(free) = column_ends
            .iter()
            .position(|&occupied_until| occupied_until <= event.start)
        {
            column_ends[free] = end;
            free
        } else {
            column_ends.push(end);
            column_ends.len() - 1
        };

        group_end = Some(group_end.map_or(end, |current| current.max(end)));

        placements.push(Placement {
            event,
            group,
            column,
            total_columns: 0,
        });
    }

    close_group(&mut placements[group_first..], column_ends.len());
    placements
}

fn close_group(group: &mut [Placement<'_>], columns: usize) {
    for placement in group {
        placement.total_columns = columns;
    }
}

/// Lays out one day's timed events.
///
/// Events entirely outside `window` are omitted; partially visible events
/// are clipped by the projector.
pub fn pack<'a>(events: &[&'a CalendarEvent], window: &DayWindow) -> Vec<PositionedEvent<'a>> {
    let placements = assign_columns(events);
    let groups = placements.last().map_or(0, |p| p.group + 1);

    let positioned: Vec<_> = placements
        .into_iter()
        .filter(|p| {
            window.is_visible(
                hour_of_day(p.event.start),
                hour_of_day(p.event.effective_end()),
            )
        })
        .map(|p| PositionedEvent {
            event: p.event,
            slot: Slot::Column {
                index: p.column,
                total: p.total_columns,
            },
            layout: geometry::project(p.event, p.column, p.total_columns, window),
        })
        .collect();

    tracing::trace!(
        events = events.len(),
        groups,
        visible = positioned.len(),
        "packed timed events"
    );
    positioned
}

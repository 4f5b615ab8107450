//! Stacking all-day banners above the time grid.

use chrono::NaiveDateTime;

use crate::event::CalendarEvent;
use crate::geometry::{DayWindow, project_all_day};
use crate::positioned::{PositionedEvent, Slot};

/// Lays out one day's all-day events as full-width rows.
///
/// Events are sorted by start and grouped while their ranges overlap. Within
/// a group, rows are handed out in arrival order and the slot records that
/// group-local row. Every banner spans the full day width, so each group is
/// drawn below the previous one on the ribbon.
pub fn stack_all_day<'a>(
    events: &[&'a CalendarEvent],
    window: &DayWindow,
) -> Vec<PositionedEvent<'a>> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);

    let mut groups: Vec<Vec<&'a CalendarEvent>> = Vec::new();
    let mut group_end: Option<NaiveDateTime> = None;

    for event in sorted {
        let end = event.effective_end();
        let joins_group = group_end.is_some_and(|current| event.start < current);
        if let (true, Some(group)) = (joins_group, groups.last_mut()) {
            group.push(event);
            group_end = group_end.map(|current| current.max(end));
        } else {
            groups.push(vec![event]);
            group_end = Some(end);
        }
    }

    let mut positioned = Vec::with_capacity(events.len());
    let mut ribbon_offset = 0;
    for group in groups {
        let total = group.len();
        for (row, event) in group.into_iter().enumerate() {
            positioned.push(PositionedEvent {
                event,
                slot: Slot::Row { index: row, total },
                layout: project_all_day(ribbon_offset + row, window),
            });
        }
        ribbon_offset += total;
    }
    positioned
}

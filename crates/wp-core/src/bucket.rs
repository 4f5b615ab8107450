//! Expanding events into the calendar days they occupy.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// Events grouped by the calendar day they touch.
pub type DayBuckets<'a> = BTreeMap<NaiveDate, Vec<&'a CalendarEvent>>;

/// Every calendar date an event occupies, in order.
///
/// The walk runs from the start date through the end date inclusive, so an
/// event ending at midnight still lands on the day it ends. Events whose end
/// precedes their start occupy only their start date.
pub fn occupied_days(event: &CalendarEvent) -> impl Iterator<Item = NaiveDate> {
    let last = event.end_date().max(event.start_date());
    event.start_date().iter_days().take_while(move |day| *day <= last)
}

/// Groups events by day.
///
/// Events are borrowed, never cloned; a multi-day event appears by reference
/// in each of its buckets. Within a bucket, events keep their input order.
pub fn bucket(events: &[CalendarEvent]) -> DayBuckets<'_> {
    let mut buckets = DayBuckets::new();
    for event in events {
        for day in occupied_days(event) {
            buckets.entry(day).or_default().push(event);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, event};

    #[test]
    fn single_day_event_lands_in_one_bucket() {
        let events = vec![event("a", "2025-01-27T09:00", "2025-01-27T10:00")];
        let buckets = bucket(&events);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&date("2025-01-27")].len(), 1);
    }

    #[test]
    fn monday_to_wednesday_2359_lands_in_three_buckets() {
        let events = vec![event("offsite", "2025-01-27T00:00", "2025-01-29T23:59")];
        let buckets = bucket(&events);

        let days: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(
            days,
            vec![date("2025-01-27"), date("2025-01-28"), date("2025-01-29")]
        );
    }

    #[test]
    fn event_ending_at_midnight_includes_terminal_day() {
        let events = vec![event("trip", "2025-01-27T00:00", "2025-01-29T00:00")];
        let buckets = bucket(&events);

        assert_eq!(buckets.len(), 3);
        assert!(buckets.contains_key(&date("2025-01-29")));
        assert!(!buckets.contains_key(&date("2025-01-30")));
    }

    #[test]
    fn overnight_event_touches_two_days() {
        let events = vec![event("deploy", "2025-01-27T22:00", "2025-01-28T02:00")];
        let buckets = bucket(&events);

        assert_eq!(buckets.len(), 2);
        assert!(buckets.contains_key(&date("2025-01-28")));
    }

    #[test]
    fn buckets_share_the_same_event_reference() {
        let events = vec![event("offsite", "2025-01-27T00:00", "2025-01-28T23:59")];
        let buckets = bucket(&events);

        let monday = buckets[&date("2025-01-27")][0];
        let tuesday = buckets[&date("2025-01-28")][0];
        assert!(std::ptr::eq(monday, tuesday));
        assert!(std::ptr::eq(monday, &events[0]));
    }

    #[test]
    fn inverted_event_occupies_start_day_only() {
        let e = event("i", "2025-01-28T09:00", "2025-01-27T10:00");
        let days: Vec<_> = occupied_days(&e).collect();
        assert_eq!(days, vec![date("2025-01-28")]);
    }

    #[test]
    fn bucket_order_follows_input_order() {
        let events = vec![
            event("late", "2025-01-27T15:00", "2025-01-27T16:00"),
            event("early", "2025-01-27T08:00", "2025-01-27T09:00"),
        ];
        let buckets = bucket(&events);
        let ids: Vec<_> = buckets[&date("2025-01-27")]
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(bucket(&[]).is_empty());
    }

    #[test]
    fn n_day_span_appears_in_n_buckets() {
        for n in 1..=10_i64 {
            let start = date("2025-03-28");
            let end = start + chrono::Duration::days(n - 1);
            let e = event(
                "span",
                &format!("{start}T08:00"),
                &format!("{end}T18:00"),
            );
            assert_eq!(occupied_days(&e).count(), usize::try_from(n).unwrap());
        }
    }
}

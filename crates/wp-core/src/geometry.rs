//! Projecting placed events onto the day grid.
//!
//! Vertical coordinates are pixels from the top of the grid (or of the
//! all-day ribbon); horizontal coordinates are percentages of the day
//! column's width.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;

/// Visible portion of a day and the grid constants used to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayWindow {
    /// First visible hour. Default: 6.
    pub start_hour: u32,

    /// Last hour that can start an event; events starting at or after it are
    /// not drawn. The grid itself has a row for this hour, so it ends one hour
    /// later. Default: 19.
    pub end_hour: u32,

    /// Grid slots per hour. Default: 4.
    pub slots_per_hour: u32,

    /// Height of a single slot in pixels. Default: 14.
    pub slot_height_px: f64,

    /// Height of one all-day banner row in pixels. Default: 32.
    pub all_day_row_height_px: f64,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 19,
            slots_per_hour: 4,
            slot_height_px: 14.0,
            all_day_row_height_px: 32.0,
        }
    }
}

impl DayWindow {
    pub fn pixels_per_hour(&self) -> f64 {
        f64::from(self.slots_per_hour) * self.slot_height_px
    }

    /// Hour labels drawn in the gutter, one per grid row (06:00 through 19:00
    /// by default).
    pub fn hour_labels(&self) -> impl Iterator<Item = u32> {
        self.start_hour..=self.end_hour
    }

    /// Number of hour rows in the grid.
    pub fn grid_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour) + 1
    }

    /// Hour at the bottom edge of the grid (20:00 by default).
    pub fn grid_end_hour(&self) -> u32 {
        self.start_hour + self.grid_hours()
    }

    /// Whether a `[start, end)` range in fractional hours reaches into the window.
    pub fn is_visible(&self, start_hour: f64, end_hour: f64) -> bool {
        start_hour < f64::from(self.end_hour) && end_hour > f64::from(self.start_hour)
    }

    fn clamp_hour(&self, hour: f64) -> f64 {
        hour.clamp(f64::from(self.start_hour), f64::from(self.grid_end_hour()))
    }
}

/// Render coordinates for one event occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Pixels from the top of the grid or ribbon.
    pub top: f64,
    /// Height in pixels; zero for degenerate events.
    pub height: f64,
    /// Percent of the day column's width.
    pub left: f64,
    /// Percent of the day column's width.
    pub width: f64,
}

/// Time of day as fractional hours. Seconds are ignored.
pub fn hour_of_day(t: NaiveDateTime) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0
}

/// Positions a timed event given its column placement.
///
/// The vertical extent is clipped to the grid, so an event that starts
/// before the window opens begins at the top and one running past the last
/// hour row stops at the bottom edge. Events ending before they start get
/// zero height.
#[expect(
    clippy::cast_precision_loss,
    reason = "column counts are bounded by the events in one day"
)]
pub fn project(
    event: &CalendarEvent,
    column_index: usize,
    total_columns: usize,
    window: &DayWindow,
) -> Layout {
    let start = window.clamp_hour(hour_of_day(event.start));
    let end = window.clamp_hour(hour_of_day(event.effective_end()));
    let pixels_per_hour = window.pixels_per_hour();

    let width = 100.0 / total_columns.max(1) as f64;
    Layout {
        top: (start - f64::from(window.start_hour)) * pixels_per_hour,
        height: (end - start).max(0.0) * pixels_per_hour,
        left: width * column_index as f64,
        width,
    }
}

/// Positions an all-day banner in the given ribbon row.
#[expect(
    clippy::cast_precision_loss,
    reason = "row counts are bounded by the events in one day"
)]
pub fn project_all_day(row_index: usize, window: &DayWindow) -> Layout {
    Layout {
        top: row_index as f64 * window.all_day_row_height_px,
        height: window.all_day_row_height_px,
        left: 0.0,
        width: 100.0,
    }
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "layout values are exact binary fractions"
)]
mod tests {
    use super::*;
    use crate::test_support::{at, event};

    #[test]
    fn default_window_matches_grid_constants() {
        let window = DayWindow::default();
        assert_eq!(window.pixels_per_hour(), 56.0);
        assert_eq!(window.grid_hours(), 14);
        assert_eq!(window.grid_end_hour(), 20);
        assert_eq!(window.hour_labels().collect::<Vec<_>>().len(), 14);
    }

    #[test]
    fn hour_of_day_counts_minutes() {
        assert_eq!(hour_of_day(at("2025-01-27T07:30")), 7.5);
        assert_eq!(hour_of_day(at("2025-01-27T00:00")), 0.0);
    }

    #[test]
    fn projects_single_column_event() {
        let e = event("a", "2025-01-27T09:00", "2025-01-27T10:30");
        let layout = project(&e, 0, 1, &DayWindow::default());

        assert_eq!(
            layout,
            Layout {
                top: 168.0,
                height: 84.0,
                left: 0.0,
                width: 100.0,
            }
        );
    }

    #[test]
    fn projects_second_of_two_columns() {
        let e = event("b", "2025-01-27T09:30", "2025-01-27T10:30");
        let layout = project(&e, 1, 2, &DayWindow::default());

        assert_eq!(layout.top, 196.0);
        assert_eq!(layout.height, 56.0);
        assert_eq!(layout.left, 50.0);
        assert_eq!(layout.width, 50.0);
    }

    #[test]
    fn clips_event_starting_before_window() {
        let e = event("early", "2025-01-27T05:00", "2025-01-27T07:30");
        let layout = project(&e, 0, 1, &DayWindow::default());

        assert_eq!(layout.top, 0.0);
        assert_eq!(layout.height, 84.0);
    }

    #[test]
    fn clips_event_running_past_grid() {
        let e = event("late", "2025-01-27T18:00", "2025-01-27T21:00");
        let layout = project(&e, 0, 1, &DayWindow::default());

        assert_eq!(layout.top, 672.0);
        assert_eq!(layout.height, 112.0);
    }

    #[test]
    fn last_hour_row_holds_event_body() {
        let window = DayWindow::default();
        let e = event("wrap-up", "2025-01-27T18:30", "2025-01-27T19:45");
        let layout = project(&e, 0, 1, &window);

        assert_eq!(layout.top, 700.0);
        assert_eq!(layout.height, 70.0);
        let grid_px = f64::from(window.grid_hours()) * window.pixels_per_hour();
        assert_eq!(layout.top + layout.height, grid_px - 14.0);
    }

    #[test]
    fn degenerate_events_have_zero_height() {
        let window = DayWindow::default();
        let zero = event("z", "2025-01-27T10:00", "2025-01-27T10:00");
        let inverted = event("i", "2025-01-27T11:00", "2025-01-27T10:00");

        assert_eq!(project(&zero, 0, 1, &window).height, 0.0);
        assert_eq!(project(&inverted, 0, 1, &window).height, 0.0);
        assert_eq!(project(&inverted, 0, 1, &window).top, 280.0);
    }

    #[test]
    fn zero_total_columns_does_not_divide_by_zero() {
        let e = event("a", "2025-01-27T09:00", "2025-01-27T10:00");
        assert_eq!(project(&e, 0, 0, &DayWindow::default()).width, 100.0);
    }

    #[test]
    fn all_day_rows_stack() {
        let window = DayWindow::default();
        assert_eq!(
            project_all_day(2, &window),
            Layout {
                top: 64.0,
                height: 32.0,
                left: 0.0,
                width: 100.0,
            }
        );
    }

    #[test]
    fn visibility_uses_strict_bounds() {
        let window = DayWindow::default();
        assert!(!window.is_visible(19.0, 20.0));
        assert!(!window.is_visible(5.0, 6.0));
        assert!(window.is_visible(5.0, 7.5));
        assert!(window.is_visible(18.75, 19.5));
    }

    #[test]
    fn window_deserializes_with_partial_fields() {
        let window: DayWindow = serde_json::from_str(r#"{"start_hour": 8}"#).unwrap();
        assert_eq!(window.start_hour, 8);
        assert_eq!(window.end_hour, 19);
    }
}

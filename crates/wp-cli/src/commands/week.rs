//! Week command: the combined layout for one visible week.
//!
//! Text output lists each day with its all-day banners first, then timed
//! blocks with their column and geometry. `--json` emits the layout itself.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wp_core::{
    CalendarSource, EventClass, PositionedEvent, Roster, WeekLayout, fetch_or_empty, layout_week,
    week_start,
};

use super::util::resolve_participants;
use crate::Config;

fn format_timed(out: &mut String, positioned: &PositionedEvent<'_>, roster: &Roster) {
    let event = positioned.event;
    let layout = positioned.layout;
    let _ = writeln!(
        out,
        "  {}-{}  col {}/{}  top {:.1} height {:.1} left {:.1}% width {:.1}%  {} [{}]",
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        positioned.index() + 1,
        positioned.total(),
        layout.top,
        layout.height,
        layout.left,
        layout.width,
        event.title,
        roster.label(&event.owner_id),
    );
}

fn format_all_day(out: &mut String, positioned: &PositionedEvent<'_>, roster: &Roster) {
    let event = positioned.event;
    let _ = writeln!(
        out,
        "  all-day  row {}/{}  {} [{}]",
        positioned.index() + 1,
        positioned.total(),
        event.title,
        roster.label(&event.owner_id),
    );
}

/// Formats a week layout for the terminal.
pub fn format_week(layout: &WeekLayout<'_>, roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Week of {}", layout.week_start);
    let _ = writeln!(out);

    for (day, positioned) in &layout.days {
        let _ = writeln!(out, "{}", day.format("%a %Y-%m-%d"));
        if positioned.is_empty() {
            let _ = writeln!(out, "  (no events)");
            continue;
        }
        for p in positioned.iter().filter(|p| p.class() == EventClass::AllDay) {
            format_all_day(&mut out, p, roster);
        }
        for p in positioned.iter().filter(|p| p.class() == EventClass::Timed) {
            format_timed(&mut out, p, roster);
        }
    }

    out
}

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    source: &dyn CalendarSource,
    reference: NaiveDate,
    participants: &[String],
    json: bool,
) -> Result<()> {
    let roster = &config.participants;
    let selected = resolve_participants(roster, config, participants)?;
    let events = fetch_or_empty(source, &selected, week_start(reference));
    let layout = layout_week(&events, reference, &config.window);

    if json {
        let json = serde_json::to_string_pretty(&layout).context("failed to serialize layout")?;
        writeln!(writer, "{json}")?;
    } else {
        write!(writer, "{}", format_week(&layout, roster))?;
    }
    Ok(())
}

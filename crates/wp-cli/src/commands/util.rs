//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use regex::Regex;
use wp_core::{Participant, Roster};

use crate::Config;

/// Pre-compiled regex for relative week parsing.
static RELATIVE_WEEK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s+weeks?\s+ago|in\s+(\d+)\s+weeks?|last\s+week|next\s+week)$").unwrap()
});

/// Conservative bound for relative week offsets (~100 years).
const MAX_RELATIVE_WEEKS: i64 = 100 * 52;

/// Parse a date as ISO 8601 or relative to `today`.
///
/// Supports:
/// - ISO 8601: "2025-01-29"
/// - "today", "last week", "next week"
/// - Relative: "2 weeks ago", "in 3 weeks"
pub fn parse_date_relative_to(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    let s = s.trim().to_lowercase();
    if s == "today" {
        return Ok(today);
    }

    let Some(caps) = RELATIVE_WEEK_RE.captures(&s) else {
        anyhow::bail!(
            "Invalid date: {s}. Use ISO 8601 (e.g., 2025-01-29), 'today', or relative (e.g., '2 weeks ago', 'next week')"
        );
    };

    let weeks: i64 = match (caps.get(1), caps.get(2)) {
        (Some(ago), _) => -ago
            .as_str()
            .parse::<i64>()
            .context("failed to parse number in relative date")?,
        (_, Some(ahead)) => ahead
            .as_str()
            .parse()
            .context("failed to parse number in relative date")?,
        _ if s.starts_with("last") => -1,
        _ => 1,
    };

    if weeks.abs() > MAX_RELATIVE_WEEKS {
        anyhow::bail!("Relative date too far away: {weeks} weeks");
    }

    Ok(today + Duration::weeks(weeks))
}

/// Parse a date as ISO 8601 or relative to the local current date.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    parse_date_relative_to(s, Local::now().date_naive())
}

/// Parse a wall-clock time as "HH:MM".
pub fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .with_context(|| format!("Invalid time: {s}. Use HH:MM (e.g., 10:30)"))
}

/// Resolve which participants to show.
///
/// Explicit IDs win over the configured selection; with neither, everyone
/// in the roster is selected. IDs missing from the roster are an error, so a
/// typo never widens the selection to everyone.
pub fn resolve_participants<'a>(
    roster: &'a Roster,
    config: &Config,
    requested: &[String],
) -> anyhow::Result<Vec<&'a Participant>> {
    let ids = if requested.is_empty() {
        config.selected.as_slice()
    } else {
        requested
    };

    if ids.is_empty() {
        return Ok(roster.participants().iter().collect());
    }

    let unknown: Vec<&str> = ids
        .iter()
        .map(String::as_str)
        .filter(|id| !roster.participants().iter().any(|p| p.id.as_str() == *id))
        .collect();
    if !unknown.is_empty() {
        anyhow::bail!("Unknown participant(s): {}", unknown.join(", "));
    }

    Ok(roster.select(ids))
}

//! The JSON event snapshot the CLI reads and writes.
//!
//! The file holds a single JSON array of events. A missing file is an empty
//! calendar, not an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use wp_core::{CalendarEvent, CalendarSource, Participant, SourceError, occupied_days};

/// Reads all events from `path`.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>, SourceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "events file missing; treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(SourceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Writes `events` to `path`, creating the parent directory if needed.
pub fn save_events(path: &Path, events: &[CalendarEvent]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(events).context("failed to serialize events")?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = ?path, events = events.len(), "saved events");
    Ok(())
}

/// Calendar source backed by the local events file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CalendarSource for JsonFileSource {
    /// Keeps events owned by the selected participants (or everyone, when the
    /// selection is empty) plus the meeting being planned, restricted to
    /// events that touch the requested week.
    fn fetch(
        &self,
        participants: &[&Participant],
        week_start: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, SourceError> {
        let week_end = week_start + Duration::days(7);
        let events: Vec<_> = load_events(&self.path)?
            .into_iter()
            .filter(|event| {
                participants.is_empty()
                    || event.owner_id.is_meeting()
                    || participants.iter().any(|p| p.id == event.owner_id)
            })
            .filter(|event| occupied_days(event).any(|day| day >= week_start && day < week_end))
            .collect();

        tracing::debug!(
            path = ?self.path,
            participants = participants.len(),
            %week_start,
            events = events.len(),
            "fetched events"
        );
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_core::{EventId, OwnerId, Roster};

    fn event(id: &str, owner: &str, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::new(
            EventId::new(id).unwrap(),
            OwnerId::new(owner).unwrap(),
            id,
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
    }

    fn roster() -> Roster {
        serde_json::from_str(
            r#"[
                {"id": "user-1", "name": "Anna", "color": "blue", "calendar_id": "anna@example.com"},
                {"id": "user-2", "name": "Jacek", "color": "red", "calendar_id": "jacek@example.com"}
            ]"#,
        )
        .unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let events = load_events(&temp.path().join("nope.json")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_events(&path).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn save_then_load_preserves_events() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested/dir/events.json");
        let events = vec![event("a", "user-1", "2025-01-27T09:00:00", "2025-01-27T10:00:00")];

        save_events(&path, &events).unwrap();
        assert_eq!(load_events(&path).unwrap(), events);
    }

    #[test]
    fn fetch_filters_by_owner_and_week() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        let events = vec![
            event("a", "user-1", "2025-01-27T09:00:00", "2025-01-27T10:00:00"),
            event("b", "user-2", "2025-01-27T09:00:00", "2025-01-27T10:00:00"),
            event("m", "meeting-proposal", "2025-01-28T11:00:00", "2025-01-28T12:00:00"),
            event("old", "user-1", "2025-01-20T09:00:00", "2025-01-20T10:00:00"),
            event("span", "user-1", "2025-01-25T00:00:00", "2025-01-27T23:59:00"),
        ];
        save_events(&path, &events).unwrap();

        let roster = roster();
        let source = JsonFileSource::new(&path);
        let fetched = source.fetch(&roster.select(&["user-1"]), monday()).unwrap();

        let ids: Vec<_> = fetched.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "span"]);
    }

    #[test]
    fn empty_selection_keeps_every_owner() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        let events = vec![
            event("a", "user-1", "2025-01-27T09:00:00", "2025-01-27T10:00:00"),
            event("z", "user-9", "2025-01-29T09:00:00", "2025-01-29T10:00:00"),
        ];
        save_events(&path, &events).unwrap();

        let fetched = JsonFileSource::new(&path).fetch(&[], monday()).unwrap();
        assert_eq!(fetched.len(), 2);
    }
}

//! Propose command: add (or replace) the meeting proposal.

use std::io::Write;

use anyhow::{Context, Result};
use wp_core::MeetingRequest;
use wp_core::meeting::merge_proposal;

use super::util::resolve_participants;
use crate::Config;
use crate::events_file::{load_events, save_events};

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    request: &MeetingRequest,
    participants: &[String],
) -> Result<()> {
    let selected = resolve_participants(&config.participants, config, participants)?;
    let proposal = request
        .propose(&selected)
        .context("invalid meeting request")?;

    let mut events = load_events(&config.events_path)
        .with_context(|| format!("failed to read {}", config.events_path.display()))?;
    let replaced = events.iter().any(|e| e.owner_id.is_proposed());

    writeln!(
        writer,
        "Proposed {} on {} {}-{}",
        proposal.title,
        proposal.start.format("%Y-%m-%d"),
        proposal.start.format("%H:%M"),
        proposal.end.format("%H:%M"),
    )?;
    if let Some(description) = &proposal.description {
        writeln!(writer, "{description}")?;
    }

    tracing::info!(id = %proposal.id, replaced, "meeting proposed");
    merge_proposal(&mut events, proposal);
    save_events(&config.events_path, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};
    use insta::assert_snapshot;
    use wp_core::{DayWindow, Roster};

    fn config(dir: &std::path::Path) -> Config {
        let participants: Roster = serde_json::from_str(
            r#"[
                {"id": "user-1", "name": "Anna", "color": "blue", "calendar_id": "anna@example.com"},
                {"id": "user-2", "name": "Jacek", "color": "red", "calendar_id": "jacek@example.com"}
            ]"#,
        )
        .unwrap();
        Config {
            events_path: dir.join("events.json"),
            window: DayWindow::default(),
            participants,
            selected: Vec::new(),
        }
    }

    fn request(title: &str, duration_minutes: i64) -> MeetingRequest {
        MeetingRequest {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            duration_minutes,
        }
    }

    #[test]
    fn propose_writes_proposal() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path());

        let mut output = Vec::new();
        run(&mut output, &config, &request("Planning", 90), &[]).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
Proposed Planning on 2025-01-29 14:00-15:30
Participants: Anna, Jacek
");
        let events = load_events(&config.events_path).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].owner_id.is_proposed());
    }

    #[test]
    fn propose_twice_keeps_single_proposal() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path());

        let mut output = Vec::new();
        run(&mut output, &config, &request("First", 30), &[]).unwrap();
        run(&mut output, &config, &request("Second", 30), &["user-2".to_string()]).unwrap();

        let events = load_events(&config.events_path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Second");
        assert_eq!(
            events[0].description.as_deref(),
            Some("Participants: Jacek")
        );
    }

    #[test]
    fn propose_rejects_invalid_request() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path());

        let mut output = Vec::new();
        let err = run(&mut output, &config, &request("Planning", 0), &[]).unwrap_err();

        assert!(format!("{err:#}").contains("duration"));
        assert!(!config.events_path.exists());
    }
}

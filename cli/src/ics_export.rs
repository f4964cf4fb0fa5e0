// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

//! [`MeetingExporter`] writing `.ics` files, the desktop stand-in for the
//! device calendar.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::TimeDelta;
use huddle_core::{CalendarError, ExportReceipt, Meeting, MeetingExporter};
use icalendar::{Calendar, Component, EventLike};
use tokio::fs;
use uuid::Uuid;

/// Writes one `.ics` file per exported meeting into the export directory.
#[derive(Debug, Clone)]
pub struct IcsExporter {
    dir: PathBuf,
}

impl IcsExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_id(meeting: &Meeting) -> String {
        if meeting.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            meeting.id.clone()
        }
    }
}

#[async_trait]
impl MeetingExporter for IcsExporter {
    async fn export(&self, meeting: &Meeting) -> Result<ExportReceipt, CalendarError> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(CalendarError::NoWritableCalendar);
        }
        fs::create_dir_all(&self.dir)
            .await
            .map_err(map_io_error)?;

        let entry_id = Self::entry_id(meeting);
        let mut event = icalendar::Event::new();
        event
            .uid(&entry_id)
            .summary(&meeting.title)
            .starts(meeting.start)
            .ends(meeting.start + TimeDelta::hours(1));
        if let Some(description) = &meeting.description {
            event.description(description);
        }
        if let Some(location) = &meeting.location {
            event.location(location);
        }

        let calendar = Calendar::new().push(event.done()).done();
        let path = self.dir.join(format!("{entry_id}.ics"));
        tracing::debug!(path = %path.display(), "writing calendar entry");
        fs::write(&path, calendar.to_string())
            .await
            .map_err(map_io_error)?;

        Ok(ExportReceipt { entry_id })
    }
}

fn map_io_error(e: std::io::Error) -> CalendarError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => CalendarError::ExportPermissionDenied,
        _ => CalendarError::Export(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn meeting() -> Meeting {
        Meeting {
            id: "mtg-7".into(),
            group_id: "grp-1".into(),
            title: "Statistics review".into(),
            description: Some("Bring chapter 4 notes".into()),
            location: Some("Student center".into()),
            start: NaiveDate::from_ymd_opt(2026, 1, 17)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            member_count: 3,
            max_capacity: Some(8),
            is_creator: true,
        }
    }

    #[tokio::test]
    async fn writes_an_ics_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = IcsExporter::new(dir.path().join("exports"));

        let receipt = exporter.export(&meeting()).await.unwrap();
        assert_eq!(receipt.entry_id, "mtg-7");

        let content =
            std::fs::read_to_string(dir.path().join("exports").join("mtg-7.ics")).unwrap();
        assert!(content.contains("BEGIN:VCALENDAR"));
        assert!(content.contains("SUMMARY:Statistics review"));
        assert!(content.contains("LOCATION:Student center"));
        assert!(content.contains("UID:mtg-7"));
    }

    #[tokio::test]
    async fn export_dir_that_is_a_file_is_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("exports");
        std::fs::write(&blocker, "not a directory").unwrap();

        let exporter = IcsExporter::new(blocker);
        let err = exporter.export(&meeting()).await.unwrap_err();
        assert_eq!(err, CalendarError::NoWritableCalendar);
    }

    #[tokio::test]
    async fn meeting_without_id_gets_a_fresh_uid() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = IcsExporter::new(dir.path().to_path_buf());

        let mut anonymous = meeting();
        anonymous.id = String::new();
        let receipt = exporter.export(&anonymous).await.unwrap();
        assert!(Uuid::parse_str(&receipt.entry_id).is_ok());
    }
}

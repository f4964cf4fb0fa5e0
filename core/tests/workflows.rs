// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end flows through the public API: load a month, browse it,
//! narrow it down, export a meeting.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use huddle_core::{
    Calendar, CalendarError, DateRangeFilter, ExportReceipt, GRID_CELLS, Meeting, MeetingExporter,
    MeetingSource, TimeSlotFilter, day_key,
};

/// In-memory meeting source holding a fixed semester schedule.
struct SemesterSource {
    meetings: Vec<Meeting>,
}

#[async_trait]
impl MeetingSource for SemesterSource {
    async fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<Meeting>, CalendarError> {
        Ok(self
            .meetings
            .iter()
            .filter(|m| {
                use chrono::Datelike;
                m.start.year() == year && m.start.month() == month
            })
            .cloned()
            .collect())
    }
}

/// Remembers every exported meeting.
struct RecordingExporter {
    exported: Mutex<Vec<String>>,
}

#[async_trait]
impl MeetingExporter for &RecordingExporter {
    async fn export(&self, meeting: &Meeting) -> Result<ExportReceipt, CalendarError> {
        self.exported.lock().unwrap().push(meeting.id.clone());
        Ok(ExportReceipt {
            entry_id: format!("entry-{}", meeting.id),
        })
    }
}

fn meeting(id: &str, y: i32, m: u32, d: u32, h: u32) -> Meeting {
    Meeting {
        id: id.into(),
        group_id: "calc-101".into(),
        title: format!("Session {id}"),
        description: Some("Weekly problem set".into()),
        location: Some("Library 2B".into()),
        start: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap(),
        member_count: 4,
        max_capacity: Some(6),
        is_creator: id.ends_with("-mine"),
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn semester() -> SemesterSource {
    SemesterSource {
        meetings: vec![
            meeting("jan-early", 2026, 1, 4, 2),
            meeting("jan-today-mine", 2026, 1, 15, 9),
            meeting("jan-today-eve", 2026, 1, 15, 19),
            meeting("jan-sat", 2026, 1, 17, 14),
            meeting("jan-late", 2026, 1, 28, 10),
            meeting("feb-first", 2026, 2, 1, 9),
        ],
    }
}

fn exporter() -> RecordingExporter {
    RecordingExporter {
        exported: Mutex::new(Vec::new()),
    }
}

#[tokio::test]
async fn browse_a_month_and_inspect_a_day() {
    let exporter = exporter();
    let mut calendar = Calendar::new(semester(), &exporter, now());
    calendar.refresh().await;

    let grid = calendar.grid();
    assert_eq!(grid.days.len(), GRID_CELLS);
    assert_eq!(calendar.meetings().len(), 5);

    // February's meeting is not in January's fetch, but January's grid
    // window still ends inside February.
    assert!(!grid.day("2026-02-01").unwrap().has_meetings());

    calendar.select_day("2026-01-15").unwrap();
    let selected = calendar.selected().unwrap();
    assert_eq!(selected.meetings.len(), 2);
    assert_eq!(day_key(selected.date), "2026-01-15");
}

#[tokio::test]
async fn navigate_to_next_month_and_back_to_today() {
    let exporter = exporter();
    let mut calendar = Calendar::new(semester(), &exporter, now());
    calendar.refresh().await;

    calendar.next_month().await;
    assert_eq!(calendar.month(), (2026, 2));
    let ids: Vec<_> = calendar.meetings().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["feb-first"]);

    calendar.go_to_today().await;
    assert_eq!(calendar.month(), (2026, 1));
    assert_eq!(calendar.selected().unwrap().key, "2026-01-15");
    assert_eq!(calendar.meetings().len(), 5);
}

#[tokio::test]
async fn narrow_a_month_by_range_and_slot() {
    let exporter = exporter();
    let mut calendar = Calendar::new(semester(), &exporter, now());
    calendar.refresh().await;

    // 2026-01-15 is a Thursday; its week runs Jan 11 through Jan 17.
    let this_week: Vec<_> = calendar
        .meetings()
        .iter()
        .filter(|m| DateRangeFilter::Week.matches(m.start, now()))
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(this_week, ["jan-today-mine", "jan-today-eve", "jan-sat"]);

    let evenings: Vec<_> = calendar
        .meetings()
        .iter()
        .filter(|m| TimeSlotFilter::Evening.matches(m.start))
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(evenings, ["jan-today-eve"]);

    // The 02:30 session is only reachable without a slot filter.
    assert!(
        calendar
            .meetings()
            .iter()
            .filter(|m| m.id == "jan-early")
            .all(|m| TimeSlotFilter::All.matches(m.start)
                && !TimeSlotFilter::Morning.matches(m.start))
    );
}

#[tokio::test]
async fn export_a_selected_meeting() {
    let exporter = exporter();
    let mut calendar = Calendar::new(semester(), &exporter, now());
    calendar.refresh().await;

    calendar.select_day("2026-01-17").unwrap();
    let meeting = calendar.selected().unwrap().meetings[0].clone();
    let receipt = calendar.export_to_device(&meeting).await.unwrap();

    assert_eq!(receipt.entry_id, "entry-jan-sat");
    assert_eq!(*exporter.exported.lock().unwrap(), vec!["jan-sat"]);
}

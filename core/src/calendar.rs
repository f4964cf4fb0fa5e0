// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::datetime::{day_key, first_of_month, parse_day_key, shift_month};
use crate::grid::MonthGrid;
use crate::{CalendarError, ExportReceipt, Meeting, MeetingExporter, MeetingSource};

/// The currently focused day and its meetings.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDay {
    pub date: NaiveDate,

    /// Canonical `YYYY-MM-DD` key of the day.
    pub key: String,

    /// Meetings of the day, taken from the loaded month at selection time.
    pub meetings: Vec<Meeting>,
}

/// State controller for one calendar screen.
///
/// Owns the displayed month, the meetings last fetched for it, and the
/// selected day. The meeting source and the exporter are injected so tests
/// can substitute fakes.
///
/// A fresh controller holds no meetings; call [`Calendar::refresh`] to load
/// the first month.
#[derive(Debug)]
pub struct Calendar<S, E> {
    source: S,
    exporter: E,

    /// The clock anchoring "today". Injected, never read from the ambient
    /// environment.
    now: NaiveDateTime,

    /// First day of the displayed month.
    cursor: NaiveDate,

    /// Last successful fetch for the displayed month. Kept as-is when a
    /// later fetch fails, stale data beats an empty screen.
    meetings: Vec<Meeting>,

    selected: Option<SelectedDay>,
    loading: bool,
    error: Option<String>,

    /// Sequence number of the most recently issued fetch.
    fetch_seq: u64,
}

impl<S, E> Calendar<S, E>
where
    S: MeetingSource,
    E: MeetingExporter,
{
    /// Creates a controller showing the month containing `now`.
    pub fn new(source: S, exporter: E, now: NaiveDateTime) -> Self {
        Self {
            source,
            exporter,
            now,
            cursor: first_of_month(now.date()),
            meetings: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            fetch_seq: 0,
        }
    }

    /// The displayed `(year, month)`, month 1-12.
    pub fn month(&self) -> (i32, u32) {
        (self.cursor.year(), self.cursor.month())
    }

    /// The 42-cell grid of the displayed month with the loaded meetings.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.cursor.year(),
            self.cursor.month(),
            self.now.date(),
            &self.meetings,
        )
        .expect("cursor always names a valid month")
    }

    /// The meetings last fetched for the displayed month.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// The focused day, if any.
    pub fn selected(&self) -> Option<&SelectedDay> {
        self.selected.as_ref()
    }

    /// The message of the most recent failed fetch, cleared on success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The clock anchoring "today".
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Moves the clock anchoring "today".
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Shows the next month and fetches its meetings.
    pub async fn next_month(&mut self) {
        self.cursor = shift_month(self.cursor, 1);
        self.refresh().await;
    }

    /// Shows the previous month and fetches its meetings.
    pub async fn previous_month(&mut self) {
        self.cursor = shift_month(self.cursor, -1);
        self.refresh().await;
    }

    /// Jumps back to the month containing `now` and selects today.
    ///
    /// Today's meetings are taken from the already loaded set first so the
    /// selection is usable immediately; a fetch follows only if the
    /// displayed month actually changed.
    pub async fn go_to_today(&mut self) {
        let today = self.now.date();
        let key = day_key(today);
        self.selected = Some(SelectedDay {
            date: today,
            meetings: self.meetings_on(&key),
            key,
        });

        let month = first_of_month(today);
        if self.cursor != month {
            self.cursor = month;
            self.refresh().await;
        }
    }

    /// Focuses the day with the given key, using the loaded meetings.
    ///
    /// Never fetches: selection within a month works offline on whatever
    /// the last fetch brought in.
    pub fn select_day(&mut self, key: &str) -> Result<(), CalendarError> {
        let date =
            parse_day_key(key).ok_or_else(|| CalendarError::InvalidDayKey(key.to_string()))?;
        self.selected = Some(SelectedDay {
            date,
            key: key.to_string(),
            meetings: self.meetings_on(key),
        });
        Ok(())
    }

    /// Re-fetches the displayed month.
    ///
    /// On failure the previously loaded meetings stay in place and the
    /// error message is recorded; on success any recorded error clears.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&mut self) {
        let seq = self.begin_fetch();
        let (year, month) = self.month();
        let result = self.source.fetch_month(year, month).await;
        self.finish_fetch(seq, result);
    }

    /// Hands the meeting over to the device calendar exporter.
    pub async fn export_to_device(&self, meeting: &Meeting) -> Result<ExportReceipt, CalendarError> {
        self.exporter.export(meeting).await
    }

    /// Issues a new fetch ticket. Any fetch still in flight becomes stale.
    fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Applies a resolved fetch.
    ///
    /// A result whose ticket has been superseded is dropped, so a slow
    /// response can never overwrite the data of a later navigation, the
    /// latest user intent wins.
    fn finish_fetch(&mut self, seq: u64, result: Result<Vec<Meeting>, CalendarError>) {
        if seq != self.fetch_seq {
            tracing::debug!(seq, latest = self.fetch_seq, "dropping stale fetch result");
            return;
        }

        self.loading = false;
        match result {
            Ok(meetings) => {
                tracing::debug!(count = meetings.len(), "loaded meetings");
                self.meetings = meetings;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "meeting fetch failed, keeping previous data");
                self.error = Some(e.to_string());
            }
        }
    }

    fn meetings_on(&self, key: &str) -> Vec<Meeting> {
        self.meetings
            .iter()
            .filter(|m| day_key(m.start.date()) == key)
            .cloned()
            .collect()
    }
}

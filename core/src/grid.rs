// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::Meeting;
use crate::datetime::day_key;

/// Number of cells in a rendered month: six weeks of seven days.
///
/// The cell count is fixed so that five-row and six-row months render the
/// same way, padded with days of the adjacent months.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    /// The calendar date of this cell.
    pub date: NaiveDate,

    /// Canonical `YYYY-MM-DD` key, used to match meetings to the cell.
    pub key: String,

    /// Whether this cell is the `today` the grid was built with.
    pub is_today: bool,

    /// False for the leading and trailing filler cells of adjacent months.
    pub in_month: bool,

    /// Meetings starting on this day, in fetch order.
    pub meetings: Vec<Meeting>,
}

impl Day {
    /// Whether any meeting starts on this day.
    pub fn has_meetings(&self) -> bool {
        !self.meetings.is_empty()
    }
}

/// A fixed 42-cell view of one calendar month.
///
/// Cell 0 is always a Sunday. The cells are consecutive calendar days, so
/// the grid always covers the whole requested month plus the filler days
/// needed to complete its first and last week.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,

    /// 1-12.
    pub month: u32,

    /// Exactly [`GRID_CELLS`] entries.
    pub days: Vec<Day>,
}

impl MonthGrid {
    /// Builds the grid for `month` (1-12) of `year`.
    ///
    /// `today` decides which cell carries the `is_today` mark; it is passed
    /// in rather than read from a clock so the caller owns the timezone
    /// decision. Meetings are assigned to the one cell whose day key equals
    /// their start date's key; meetings outside the 42-day window appear in
    /// no cell.
    ///
    /// Returns `None` if `year`/`month` do not name a valid calendar month.
    pub fn build(year: i32, month: u32, today: NaiveDate, meetings: &[Meeting]) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let leading = first.weekday().num_days_from_sunday() as i64;
        let start = first - TimeDelta::days(leading);

        let days = (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = start + TimeDelta::days(offset);
                let key = day_key(date);
                let meetings: Vec<_> = meetings
                    .iter()
                    .filter(|m| day_key(m.start.date()) == key)
                    .cloned()
                    .collect();
                Day {
                    date,
                    key,
                    is_today: date == today,
                    in_month: date.year() == year && date.month() == month,
                    meetings,
                }
            })
            .collect();

        Some(Self { year, month, days })
    }

    /// The cell with the given day key, if it is inside the grid's window.
    pub fn day(&self, key: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.key == key)
    }
}

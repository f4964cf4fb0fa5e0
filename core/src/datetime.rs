// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Day-level date helpers shared by the grid builder and the filters.
//!
//! Everything here works on naive values. The caller decides the timezone by
//! choosing what it passes in; no implicit conversion ever happens.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

/// Canonical key format for one calendar day, `YYYY-MM-DD` with zero padding.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as its canonical day key.
///
/// Two timestamps fall on the same day iff their keys are equal.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key back into a date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// Whether two timestamps fall on the same calendar day.
pub fn same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub(crate) const fn start_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// The last representable millisecond of a day.
pub(crate) const fn end_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 must exist in NaiveTime")
}

/// The start of the day (00:00:00) for the given date.
pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, start_of_day_naive())
}

/// The end of the day (23:59:59.999) for the given date.
pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, end_of_day_naive())
}

/// The Sunday of the week containing `date`. Weeks always start on Sunday.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Sun).first_day()
}

/// The Saturday of the week containing `date`.
pub(crate) fn week_end(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Sun).last_day()
}

/// The first and last calendar day of `date`'s month.
pub(crate) fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(date);
    let last = shift_month(date, 1)
        .pred_opt()
        .expect("day before the first of a month must exist");
    (first, last)
}

/// The first day of `date`'s month.
pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 must exist in every month")
}

/// The first day of the month `delta` months away from `date`'s month.
pub(crate) fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
        .expect("first day of a month must exist")
}

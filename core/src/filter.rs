// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDateTime, Timelike};

use crate::datetime::{end_of_day, month_bounds, start_of_day, week_end, week_start};

/// Coarse temporal bucket used to narrow a list of meetings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateRangeFilter {
    /// No date restriction.
    #[default]
    All,

    /// The full calendar day containing `now`.
    Today,

    /// Sunday through Saturday of the week containing `now`.
    Week,

    /// The calendar month containing `now`.
    Month,
}

impl DateRangeFilter {
    /// Concrete inclusive bounds for this bucket relative to `now`, or
    /// `None` for [`DateRangeFilter::All`].
    ///
    /// Both ends are full-day bounds: 00:00:00 through 23:59:59.999.
    pub fn bounds(self, now: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let today = now.date();
        match self {
            Self::All => None,
            Self::Today => Some((start_of_day(today), end_of_day(today))),
            Self::Week => Some((start_of_day(week_start(today)), end_of_day(week_end(today)))),
            Self::Month => {
                let (first, last) = month_bounds(today);
                Some((start_of_day(first), end_of_day(last)))
            }
        }
    }

    /// Whether a meeting starting at `start` falls in this bucket.
    pub fn matches(self, start: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self.bounds(now) {
            None => true,
            Some((lo, hi)) => lo <= start && start <= hi,
        }
    }
}

const RANGE_ALL: &str = "all";
const RANGE_TODAY: &str = "today";
const RANGE_WEEK: &str = "week";
const RANGE_MONTH: &str = "month";

impl AsRef<str> for DateRangeFilter {
    fn as_ref(&self) -> &str {
        match self {
            Self::All => RANGE_ALL,
            Self::Today => RANGE_TODAY,
            Self::Week => RANGE_WEEK,
            Self::Month => RANGE_MONTH,
        }
    }
}

impl Display for DateRangeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for DateRangeFilter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            RANGE_ALL => Ok(Self::All),
            RANGE_TODAY => Ok(Self::Today),
            RANGE_WEEK => Ok(Self::Week),
            RANGE_MONTH => Ok(Self::Month),
            _ => Err(()),
        }
    }
}

/// Coarse hour-of-day bucket used to narrow meetings by time of day.
///
/// Hours 0 through 5 belong to no named slot: a meeting before 06:00 only
/// shows up under [`TimeSlotFilter::All`]. The gap is kept on purpose, it
/// matches how the buckets have always been presented to users.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TimeSlotFilter {
    /// No time restriction.
    #[default]
    All,

    /// 06:00 through 11:59.
    Morning,

    /// 12:00 through 17:59.
    Afternoon,

    /// 18:00 through 23:59.
    Evening,
}

impl TimeSlotFilter {
    /// Inclusive hour-of-day bounds, or `None` for [`TimeSlotFilter::All`].
    pub fn hours(self) -> Option<(u32, u32)> {
        match self {
            Self::All => None,
            Self::Morning => Some((6, 11)),
            Self::Afternoon => Some((12, 17)),
            Self::Evening => Some((18, 23)),
        }
    }

    /// Whether a meeting starting at `start` falls in this slot.
    pub fn matches(self, start: NaiveDateTime) -> bool {
        match self.hours() {
            None => true,
            Some((lo, hi)) => {
                let hour = start.hour();
                lo <= hour && hour <= hi
            }
        }
    }
}

const SLOT_ALL: &str = "all";
const SLOT_MORNING: &str = "morning";
const SLOT_AFTERNOON: &str = "afternoon";
const SLOT_EVENING: &str = "evening";

impl AsRef<str> for TimeSlotFilter {
    fn as_ref(&self) -> &str {
        match self {
            Self::All => SLOT_ALL,
            Self::Morning => SLOT_MORNING,
            Self::Afternoon => SLOT_AFTERNOON,
            Self::Evening => SLOT_EVENING,
        }
    }
}

impl Display for TimeSlotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for TimeSlotFilter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            SLOT_ALL => Ok(Self::All),
            SLOT_MORNING => Ok(Self::Morning),
            SLOT_AFTERNOON => Ok(Self::Afternoon),
            SLOT_EVENING => Ok(Self::Evening),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn all_has_no_bounds() {
        let now = at(2026, 1, 15, 12, 0);
        assert_eq!(DateRangeFilter::All.bounds(now), None);
        assert!(DateRangeFilter::All.matches(at(1999, 1, 1, 0, 0), now));
    }

    #[test]
    fn today_spans_the_full_day() {
        let now = at(2026, 1, 15, 14, 30);
        let (start, end) = DateRangeFilter::Today.bounds(now).unwrap();
        assert_eq!(start, at(2026, 1, 15, 0, 0));
        assert_eq!(start.date(), end.date());
        assert_eq!(
            end.time(),
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
        );

        assert!(DateRangeFilter::Today.matches(at(2026, 1, 15, 0, 0), now));
        assert!(DateRangeFilter::Today.matches(at(2026, 1, 15, 23, 59), now));
        assert!(!DateRangeFilter::Today.matches(at(2026, 1, 16, 0, 0), now));
    }

    #[test]
    fn week_runs_sunday_to_saturday() {
        // 2026-01-15 is a Thursday.
        let now = at(2026, 1, 15, 10, 0);
        let (start, end) = DateRangeFilter::Week.bounds(now).unwrap();
        assert_eq!(start, at(2026, 1, 11, 0, 0));
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());

        assert!(DateRangeFilter::Week.matches(at(2026, 1, 11, 0, 0), now));
        assert!(DateRangeFilter::Week.matches(at(2026, 1, 17, 23, 59), now));
        assert!(!DateRangeFilter::Week.matches(at(2026, 1, 10, 23, 59), now));
        assert!(!DateRangeFilter::Week.matches(at(2026, 1, 18, 0, 0), now));
    }

    #[test]
    fn month_covers_first_to_last_day() {
        let now = at(2024, 2, 10, 8, 0);
        let (start, end) = DateRangeFilter::Month.bounds(now).unwrap();
        assert_eq!(start, at(2024, 2, 1, 0, 0));
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn slot_hours_are_inclusive() {
        assert_eq!(TimeSlotFilter::Morning.hours(), Some((6, 11)));
        assert_eq!(TimeSlotFilter::Afternoon.hours(), Some((12, 17)));
        assert_eq!(TimeSlotFilter::Evening.hours(), Some((18, 23)));
        assert_eq!(TimeSlotFilter::All.hours(), None);
    }

    #[test]
    fn morning_matches_six_through_eleven() {
        assert!(!TimeSlotFilter::Morning.matches(at(2026, 1, 15, 5, 59)));
        assert!(TimeSlotFilter::Morning.matches(at(2026, 1, 15, 6, 0)));
        assert!(TimeSlotFilter::Morning.matches(at(2026, 1, 15, 11, 59)));
        assert!(!TimeSlotFilter::Morning.matches(at(2026, 1, 15, 12, 0)));
    }

    #[test]
    fn early_hours_match_only_all() {
        // 02:00 belongs to no named slot.
        let start = at(2026, 1, 15, 2, 0);
        assert!(TimeSlotFilter::All.matches(start));
        assert!(!TimeSlotFilter::Morning.matches(start));
        assert!(!TimeSlotFilter::Afternoon.matches(start));
        assert!(!TimeSlotFilter::Evening.matches(start));
    }

    #[test]
    fn evening_ends_at_midnight() {
        assert!(TimeSlotFilter::Evening.matches(at(2026, 1, 15, 23, 59)));
        assert!(!TimeSlotFilter::Evening.matches(at(2026, 1, 16, 0, 0)));
    }

    #[test]
    fn filters_round_trip_through_strings() {
        for filter in [
            DateRangeFilter::All,
            DateRangeFilter::Today,
            DateRangeFilter::Week,
            DateRangeFilter::Month,
        ] {
            assert_eq!(filter.to_string().parse(), Ok(filter));
        }
        for filter in [
            TimeSlotFilter::All,
            TimeSlotFilter::Morning,
            TimeSlotFilter::Afternoon,
            TimeSlotFilter::Evening,
        ] {
            assert_eq!(filter.to_string().parse(), Ok(filter));
        }
        assert_eq!("midnight".parse::<TimeSlotFilter>(), Err(()));
    }
}

// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar domain for Huddle: month grids, meeting filters, and the state
//! controller that drives a calendar screen.

mod calendar;
mod datetime;
mod error;
mod filter;
mod grid;
mod meeting;
mod source;

pub use crate::calendar::{Calendar, SelectedDay};
pub use crate::datetime::{DAY_KEY_FORMAT, day_key, parse_day_key, same_day};
pub use crate::error::CalendarError;
pub use crate::filter::{DateRangeFilter, TimeSlotFilter};
pub use crate::grid::{Day, GRID_CELLS, MonthGrid};
pub use crate::meeting::Meeting;
pub use crate::source::{ExportReceipt, MeetingExporter, MeetingSource};

// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Calendar errors.
///
/// None of these are fatal: a fetch failure leaves the previously loaded
/// meetings in place, and every retry is user initiated.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The meeting source failed. Previously loaded data stays usable.
    Fetch(String),

    /// The meeting source answered with something we could not understand.
    InvalidResponse(String),

    /// The calendar permission was not granted.
    ExportPermissionDenied,

    /// No calendar on the device accepts new entries.
    NoWritableCalendar,

    /// The exporter rejected the meeting.
    Export(String),

    /// A day key that does not name a calendar day.
    InvalidDayKey(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Failed to fetch meetings: {e}"),
            Self::InvalidResponse(e) => write!(f, "Invalid meeting source response: {e}"),
            Self::ExportPermissionDenied => write!(f, "Calendar permission not granted"),
            Self::NoWritableCalendar => write!(f, "No writable calendar available"),
            Self::Export(e) => write!(f, "Failed to export meeting: {e}"),
            Self::InvalidDayKey(key) => write!(f, "Not a valid day key: {key}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for CalendarError {}

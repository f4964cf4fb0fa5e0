// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{CalendarError, Meeting};

/// Where meetings come from, one month at a time.
///
/// Implementations must return every meeting whose start falls within the
/// requested calendar month; ordering is not required. The controller takes
/// the source as an injected dependency so tests can substitute fakes.
#[async_trait]
pub trait MeetingSource {
    /// Fetches all meetings of `month` (1-12) of `year`.
    async fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<Meeting>, CalendarError>;
}

/// Receipt for a successfully exported meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Identifier the device calendar assigned to the new entry.
    pub entry_id: String,
}

/// Writes a meeting into the user's own calendar.
#[async_trait]
pub trait MeetingExporter {
    /// Exports one meeting, returning the created entry's receipt.
    async fn export(&self, meeting: &Meeting) -> Result<ExportReceipt, CalendarError>;
}

// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One scheduled study group meeting.
///
/// Meetings are immutable values constructed by a [`MeetingSource`] per
/// fetch; a re-fetch supersedes the whole list rather than patching entries.
///
/// [`MeetingSource`]: crate::MeetingSource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Unique identifier assigned by the backend.
    pub id: String,

    /// The study group this meeting belongs to.
    pub group_id: String,

    /// Short display title.
    pub title: String,

    /// Longer description, if the organizer wrote one.
    #[serde(default)]
    pub description: Option<String>,

    /// Where the group meets.
    #[serde(default)]
    pub location: Option<String>,

    /// When the meeting starts, in the wall-clock time of the group.
    #[serde(rename = "startDate")]
    pub start: NaiveDateTime,

    /// How many members have joined so far.
    #[serde(default)]
    pub member_count: u32,

    /// Maximum number of attendees; `None` means the group has no size cap.
    #[serde(default)]
    pub max_capacity: Option<u32>,

    /// Whether the current user created this meeting.
    #[serde(default)]
    pub is_creator: bool,
}

impl Meeting {
    /// Whether no further members can join.
    pub fn is_full(&self) -> bool {
        self.max_capacity
            .is_some_and(|cap| self.member_count >= cap)
    }

    /// Remaining open seats, or `None` for uncapped groups.
    pub fn spots_left(&self) -> Option<u32> {
        self.max_capacity
            .map(|cap| cap.saturating_sub(self.member_count))
    }
}

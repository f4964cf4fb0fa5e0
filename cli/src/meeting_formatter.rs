// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::Color;
use huddle_core::Meeting;

use crate::table::{Column, PaddingDirection, Table};

/// Formats meetings as an aligned table.
#[derive(Debug)]
pub struct MeetingFormatter {
    columns: Vec<MeetingColumn>,
}

impl MeetingFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                MeetingColumn::Time,
                MeetingColumn::Title,
                MeetingColumn::Location,
                MeetingColumn::Seats,
            ],
        }
    }

    pub fn write(&self, w: &mut impl io::Write, meetings: &[Meeting]) -> io::Result<()> {
        let table = Table {
            columns: self.columns.clone(),
            separator: "  ".to_string(),
            data: meetings,
        };
        table.write_to(w)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MeetingColumn {
    /// Weekday, day of month and start time.
    Time,

    Title,
    Location,

    /// `joined/capacity`, or just the member count for uncapped groups.
    Seats,
}

impl Column<Meeting> for MeetingColumn {
    fn format(&self, meeting: &Meeting) -> String {
        match self {
            Self::Time => meeting.start.format("%a %d %H:%M").to_string(),
            Self::Title => meeting.title.clone(),
            Self::Location => meeting.location.clone().unwrap_or_else(|| "-".to_string()),
            Self::Seats => match meeting.max_capacity {
                Some(cap) => format!("{}/{}", meeting.member_count, cap),
                None => meeting.member_count.to_string(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Seats => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, meeting: &Meeting) -> Option<Color> {
        match self {
            Self::Title if meeting.is_creator => Some(Color::Cyan),
            Self::Seats if meeting.is_full() => Some(Color::Red),
            _ => None,
        }
    }
}

// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use huddle_core::{DateRangeFilter, Meeting, TimeSlotFilter};

use crate::cli::App;
use crate::meeting_formatter::MeetingFormatter;

/// List the current month's meetings, narrowed by date range and time slot.
#[derive(Debug, Default, Clone)]
pub struct CmdList {
    pub range: DateRangeFilter,
    pub slot: TimeSlotFilter,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List meetings of the current month")
            .arg(
                arg!(-r --range [RANGE] "Keep only meetings within this date range")
                    .value_parser(value_parser!(DateRangeFilter)),
            )
            .arg(
                arg!(-s --slot [SLOT] "Keep only meetings starting in this time of day")
                    .value_parser(value_parser!(TimeSlotFilter)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            range: matches.get_one("range").copied().unwrap_or_default(),
            slot: matches.get_one("slot").copied().unwrap_or_default(),
        }
    }

    pub async fn run(self, calendar: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing meetings...");
        calendar.refresh().await;

        if let Some(error) = calendar.error() {
            println!("{} {error}", "Warning:".yellow());
        }

        let now = calendar.now();
        let mut meetings: Vec<Meeting> = calendar
            .meetings()
            .iter()
            .filter(|m| self.range.matches(m.start, now) && self.slot.matches(m.start))
            .cloned()
            .collect();
        meetings.sort_by_key(|m| m.start);

        if meetings.is_empty() {
            println!("{}", "No meetings found".italic());
        } else {
            MeetingFormatter::new().write(&mut io::stdout(), &meetings)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CmdList {
        let cmd = Command::new("test").subcommand(CmdList::command());
        let matches = cmd.try_get_matches_from(args).unwrap();
        CmdList::from(matches.subcommand_matches("list").unwrap())
    }

    #[test]
    fn parses_defaults_to_all() {
        let parsed = parse(&["test", "list"]);
        assert_eq!(parsed.range, DateRangeFilter::All);
        assert_eq!(parsed.slot, TimeSlotFilter::All);
    }

    #[test]
    fn parses_range_and_slot() {
        let parsed = parse(&["test", "list", "--range", "week", "--slot", "evening"]);
        assert_eq!(parsed.range, DateRangeFilter::Week);
        assert_eq!(parsed.slot, TimeSlotFilter::Evening);
    }

    #[test]
    fn rejects_unknown_slot() {
        let cmd = Command::new("test").subcommand(CmdList::command());
        let result = cmd.try_get_matches_from(["test", "list", "--slot", "midnight"]);
        assert!(result.is_err());
    }
}

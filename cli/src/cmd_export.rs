// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::cli::App;

/// Export one meeting of the current month to the device calendar.
#[derive(Debug, Clone)]
pub struct CmdExport {
    /// Identifier of the meeting to export.
    pub id: String,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export a meeting as a calendar entry")
            .arg(arg!(<ID> "Identifier of the meeting to export"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches
                .get_one::<String>("ID")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, calendar: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "exporting meeting...");
        calendar.refresh().await;

        if calendar.meetings().is_empty()
            && let Some(error) = calendar.error()
        {
            return Err(error.into());
        }

        let meeting = calendar
            .meetings()
            .iter()
            .find(|m| m.id == self.id)
            .ok_or_else(|| format!("No meeting `{}` in the current month", self.id))?
            .clone();

        let receipt = calendar.export_to_device(&meeting).await?;
        println!(
            "{} exported as calendar entry {}",
            meeting.title.bold(),
            receipt.entry_id.green(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_meeting_id() {
        let cmd = Command::new("test").subcommand(CmdExport::command());
        let matches = cmd.try_get_matches_from(["test", "export", "mtg-42"]).unwrap();
        let parsed = CmdExport::from(matches.subcommand_matches("export").unwrap());
        assert_eq!(parsed.id, "mtg-42");
    }

    #[test]
    fn the_id_is_required() {
        let cmd = Command::new("test").subcommand(CmdExport::command());
        assert!(cmd.try_get_matches_from(["test", "export"]).is_err());
    }
}

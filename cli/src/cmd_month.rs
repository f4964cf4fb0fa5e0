// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use chrono::{Datelike, NaiveDate};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use huddle_core::{Day, MonthGrid};

use crate::cli::App;
use crate::meeting_formatter::MeetingFormatter;

/// Show the month grid, optionally focused on one day.
#[derive(Debug, Default, Clone)]
pub struct CmdMonth {
    /// Months relative to the current one.
    pub offset: i32,

    /// Day key (`YYYY-MM-DD`) to select.
    pub day: Option<String>,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the month grid of meetings")
            .arg(
                arg!(-o --offset [OFFSET] "Months relative to the current one")
                    .value_parser(value_parser!(i32).range(-240..=240))
                    .allow_hyphen_values(true),
            )
            .arg(arg!(-d --day [DAY] "Select a day (YYYY-MM-DD) and list its meetings"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            offset: matches.get_one("offset").copied().unwrap_or(0),
            day: matches.get_one("day").cloned(),
        }
    }

    pub async fn run(self, calendar: &mut App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month grid...");

        if self.offset == 0 {
            calendar.refresh().await;
        } else {
            for _ in 0..self.offset.abs() {
                if self.offset > 0 {
                    calendar.next_month().await;
                } else {
                    calendar.previous_month().await;
                }
            }
        }

        if let Some(error) = calendar.error() {
            println!("{} {error}", "Warning:".yellow());
        }

        let mut stdout = io::stdout();
        render_grid(&mut stdout, &calendar.grid())?;

        match &self.day {
            Some(key) => calendar.select_day(key)?,
            None if self.offset == 0 => calendar.go_to_today().await,
            None => return Ok(()),
        }

        if let Some(selected) = calendar.selected() {
            println!("\n{} {}", "►".green(), selected.key.bold());
            if selected.meetings.is_empty() {
                println!("{}", "No meetings".italic());
            } else {
                MeetingFormatter::new().write(&mut stdout, &selected.meetings)?;
            }
        }

        Ok(())
    }
}

fn render_grid(w: &mut impl Write, grid: &MonthGrid) -> io::Result<()> {
    let first = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .expect("grid always carries a valid month");
    writeln!(w, "{:^20}", first.format("%B %Y").to_string().bold())?;
    writeln!(w, "{}", "Su Mo Tu We Th Fr Sa".bright_black())?;

    for week in grid.days.chunks(7) {
        let row: Vec<String> = week.iter().map(stylize_day).collect();
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

fn stylize_day(day: &Day) -> String {
    let cell = format!("{:>2}", day.date.day());
    if day.is_today {
        cell.reversed().bold().to_string()
    } else if !day.in_month {
        cell.bright_black().to_string()
    } else if day.has_meetings() {
        cell.green().bold().to_string()
    } else {
        cell
    }
}

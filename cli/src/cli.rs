// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use huddle_core::Calendar;

use crate::cmd_export::CmdExport;
use crate::cmd_list::CmdList;
use crate::cmd_month::CmdMonth;
use crate::config::{APP_NAME, parse_config};
use crate::http_source::HttpMeetingSource;
use crate::ics_export::IcsExporter;

/// The calendar controller as wired for the terminal.
pub(crate) type App = Calendar<HttpMeetingSource, IcsExporter>;

/// Run the Huddle command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse and plan study group meetings from your terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the month grid
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/huddle/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/huddle/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdMonth::command())
            .subcommand(CmdList::command())
            .subcommand(CmdExport::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            None => Month(CmdMonth::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the month grid
    Month(CmdMonth),

    /// List meetings of the current month
    List(CmdList),

    /// Export a meeting to the device calendar
    Export(CmdExport),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Month(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            List(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Export(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut App) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;

        let source = HttpMeetingSource::new(&config)?;
        let export_dir = config
            .export_dir
            .clone()
            .ok_or("no writable export directory could be resolved")?;
        let exporter = IcsExporter::new(export_dir);

        let mut calendar = Calendar::new(source, exporter, Local::now().naive_local());
        f(&mut calendar).await
    }
}

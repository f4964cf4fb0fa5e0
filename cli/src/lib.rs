// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_export;
mod cmd_list;
mod cmd_month;
mod config;
mod http_source;
mod ics_export;
mod meeting_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;

// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pullfix using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pullfix [global options] [command]
//! audit [--repo DIR] [PATH]
//! options
//! version
//! ```
//!
//! No command at all runs `audit` with the configured defaults, keeping
//! the original zero-argument invocation working.

pub mod audit;
pub mod global;


use crate::cli::audit::AuditArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Repository State Auditor
///
/// Untracks a locally-modified database file that blocks `git pull`.
#[derive(Debug, Parser)]
#[command(
    name = "pullfix",
    author,
    version,
    about = "Repository State Auditor",
    long_about = "Resolves the classic 'local changes to a tracked runtime \
                  file would be overwritten by merge' pull blocker: checks \
                  whether the file exists and is tracked, removes it from \
                  the index while keeping it on disk, commits the removal, \
                  and reports which ignore rules are still missing.\n\n\
                  The tool never deletes the file and never pulls; the \
                  final report tells the operator to run `git pull` \
                  themselves.",
    after_help = "CONFIG FILES:\n\n\
                  By default, pullfix looks for `pullfix.toml` in the\n\
                  current directory. Additional TOML files can be passed\n\
                  with --config and are layered on top, followed by\n\
                  PULLFIX_* environment variables and command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Runs the audit sequence (the default command).
    Audit(AuditArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

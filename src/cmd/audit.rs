// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Audit command implementation for pullfix.

use anyhow::Context;
use tracing::debug;

use crate::audit::run_audit;
use crate::cli::audit::AuditArgs;
use crate::config::Config;
use crate::error::Result;

/// Main handler for the audit command.
///
/// Applies the CLI target override on top of the loaded configuration,
/// runs the audit sequence, and prints the report to stdout.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined, the
/// target override is invalid, or the audit itself fails.
pub fn run_audit_command(args: &AuditArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(path) = &args.path {
        config.target.path = path.clone();
        // Overrides go through the same validation as config files.
        config.resolve_and_validate()?;
    }

    let repo = match &args.repo {
        Some(repo) => repo.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    debug!(repo = %repo.display(), path = %config.target.path.display(), "starting audit");

    let report = run_audit(&repo, &config).map_err(|e| {
        eprintln!("Audit failed: {e}");
        e
    })?;

    print!("{report}");
    Ok(())
}

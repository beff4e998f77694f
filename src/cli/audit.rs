// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Audit command arguments.
//!
//! ```text
//! audit                       audit the configured target in cwd
//! audit --repo /srv/bot       audit in another checkout
//! audit data/cache.db         override the target path
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `audit` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AuditArgs {
    /// Repository to audit (defaults to the current directory).
    #[arg(short = 'r', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Target file override, relative to the repository root.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

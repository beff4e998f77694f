// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using the shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (index removal, commit)
//! ```

use crate::error::{GitError, PullfixResult};
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Verify that the git binary is available on PATH.
///
/// The auditor refuses to start without it rather than surfacing a raw
/// spawn failure halfway through the sequence.
///
/// # Errors
///
/// Returns `GitError::GitNotFound` if no git executable can be located.
pub fn ensure_git_available() -> PullfixResult<()> {
    which::which("git").map_err(|_| GitError::GitNotFound)?;
    Ok(())
}

/// Remove a file from the index while keeping it on disk.
///
/// # Errors
///
/// Returns a `GitError` if the `git rm --cached` operation fails.
pub fn untrack_file(repo_path: &Path, file: &Path) -> PullfixResult<()> {
    ShellBackend::untrack(repo_path, file)
}

/// Create a commit from whatever is staged.
///
/// # Errors
///
/// Returns a `GitError` if the commit fails, including when nothing is
/// staged.
pub fn commit(repo_path: &Path, message: &str) -> PullfixResult<()> {
    ShellBackend::commit(repo_path, message)
}

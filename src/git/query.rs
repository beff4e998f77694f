// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using the gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```
//!
//! Uses gix for read-only operations (faster, no subprocess overhead).

use crate::error::PullfixResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Check if file is tracked by git (present in the index).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or index access fails.
pub fn is_tracked(repo_path: &Path, file: &Path) -> PullfixResult<bool> {
    GixBackend::is_tracked(repo_path, file)
}

/// Check if anything is staged for the next commit.
///
/// # Errors
///
/// Returns a `GitError` if the staged-state probe fails.
pub fn has_staged_changes(repo_path: &Path) -> PullfixResult<bool> {
    GixBackend::has_staged_changes(repo_path)
}

// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The audit sequence.
//!
//! ```text
//! run_audit(repo, config)
//!     |
//!     v
//! Existence ---> Tracking ---> Ignore rules ---> Notice
//!  (fs)        (gix read,        (line scan)     (report)
//!               git rm/commit)
//! ```
//!
//! Every step is idempotent and none deletes the on-disk target. Benign
//! absences (file missing, already untracked, rules missing, nothing
//! staged) are recorded in the report; only environment failures (no git,
//! not a repository, unreadable ignore file) abort the run.

pub mod ignore;
pub mod report;


use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{GitError, PullfixResult};
use crate::git::cmd::{commit, ensure_git_available, untrack_file};
use crate::git::query::{has_staged_changes, is_git_repo, is_tracked};

pub use ignore::{IgnoreRuleState, IgnoreRules};
pub use report::{AuditReport, TrackedFileStatus, UntrackOutcome};

/// Run the full audit sequence against the repository at `repo`.
///
/// Mutations (index removal, commit) happen only when the target is
/// tracked and `global.dry` is off. The returned report carries the
/// observations of every step in sequence order.
///
/// # Errors
///
/// Returns a `GitError` if git is not on PATH, `repo` is not inside a git
/// repository, or a git command fails for a reason other than the benign
/// states the audit expects. Returns an `FsError` if the ignore-rules file
/// exists but cannot be read.
pub fn run_audit(repo: &Path, config: &Config) -> PullfixResult<AuditReport> {
    ensure_git_available()?;
    if !is_git_repo(repo) {
        return Err(GitError::NotARepository {
            path: repo.display().to_string(),
        }
        .into());
    }

    let target = &config.target.path;

    // Step 1: existence check, purely informational.
    let exists_on_disk = repo.join(target).exists();
    debug!(path = %target.display(), exists_on_disk, "existence check");

    // Step 2: tracking check, the only step that may mutate the index.
    let tracked = is_tracked(repo, target)?;
    let outcome = if tracked {
        untrack(repo, config)?
    } else {
        debug!(path = %target.display(), "already untracked, no-op");
        UntrackOutcome::AlreadyUntracked
    };

    // Step 3: ignore-rule check, read-only.
    let rules = ignore::scan(&repo.join(&config.target.ignore_file), target)?;
    debug!(
        file = %config.target.ignore_file.display(),
        present = rules.all_present(),
        "ignore-rule check"
    );

    Ok(AuditReport {
        status: TrackedFileStatus {
            path: target.clone(),
            exists_on_disk,
            is_tracked: tracked,
        },
        outcome,
        ignore_file: config.target.ignore_file.clone(),
        rules,
    })
}

fn untrack(repo: &Path, config: &Config) -> PullfixResult<UntrackOutcome> {
    let target = &config.target.path;

    if config.global.dry {
        info!(path = %target.display(), "dry run, would untrack and commit");
        return Ok(UntrackOutcome::SkippedDryRun);
    }

    info!(path = %target.display(), "removing from index, keeping on disk");
    untrack_file(repo, target)?;

    // An untrack in a repository whose history never contained the file
    // leaves the index matching HEAD; committing would fail. That is a
    // benign no-op, not an error.
    if has_staged_changes(repo)? {
        let message = config.target.commit_message();
        info!(commit_message = %message, "committing index removal");
        commit(repo, &message)?;
        Ok(UntrackOutcome::Committed)
    } else {
        info!("nothing staged after untrack, skipping commit");
        Ok(UntrackOutcome::NothingToCommit)
    }
}

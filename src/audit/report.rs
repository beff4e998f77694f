// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Audit report types and rendering.
//!
//! The report prints in fixed step order so the operator reads it top to
//! bottom exactly as the audit ran:
//!
//! ```text
//! target: schedule_bot/schedule.db
//! exists: yes
//! tracked: yes
//! untracked and committed (file kept on disk)
//! ignore rules: missing
//! add these lines to .gitignore:
//!   schedule_bot/schedule.db
//!   *.db
//! done - run `git pull` to continue
//! ```

use std::fmt;
use std::path::PathBuf;

use super::ignore::IgnoreRules;

/// Observed state of the target file, computed fresh per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFileStatus {
    /// Repository-relative path of the target.
    pub path: PathBuf,
    /// Whether the file exists in the working tree.
    pub exists_on_disk: bool,
    /// Whether the index tracked the file when the audit started.
    pub is_tracked: bool,
}

/// Result of the tracking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UntrackOutcome {
    /// The file was removed from the index and a commit recorded it.
    Committed,
    /// The file was removed from the index but nothing was staged
    /// afterwards, so the commit was skipped as a no-op.
    NothingToCommit,
    /// The index did not track the file; nothing was done.
    AlreadyUntracked,
    /// Dry run; the index mutation was logged but not executed.
    SkippedDryRun,
}

impl UntrackOutcome {
    const fn as_line(self) -> &'static str {
        match self {
            Self::Committed => "untracked and committed (file kept on disk)",
            Self::NothingToCommit => "untracked, commit skipped (nothing staged)",
            Self::AlreadyUntracked => "already untracked, no index changes",
            Self::SkippedDryRun => "dry run, index not touched",
        }
    }
}

/// Aggregate result of one audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Target file status at the start of the run.
    pub status: TrackedFileStatus,
    /// What the tracking step did.
    pub outcome: UntrackOutcome,
    /// The ignore-rules file that was scanned.
    pub ignore_file: PathBuf,
    /// Presence of the expected ignore rules.
    pub rules: IgnoreRules,
}

const fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "target: {}", self.status.path.display())?;
        writeln!(f, "exists: {}", yes_no(self.status.exists_on_disk))?;
        writeln!(f, "tracked: {}", yes_no(self.status.is_tracked))?;
        writeln!(f, "{}", self.outcome.as_line())?;

        if self.rules.all_present() {
            writeln!(f, "ignore rules: present")?;
        } else {
            writeln!(f, "ignore rules: missing")?;
            writeln!(f, "add these lines to {}:", self.ignore_file.display())?;
            for line in self.rules.suggested_lines() {
                writeln!(f, "  {line}")?;
            }
        }

        writeln!(f, "done - run `git pull` to continue")
    }
}

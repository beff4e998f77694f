// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, PullfixResult};
use std::path::Path;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Check if file is tracked by git (present in the index).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or index access fails.
    fn is_tracked(repo_path: &Path, file: &Path) -> PullfixResult<bool>;

    /// Check if anything is staged for the next commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the staged-state probe fails.
    fn has_staged_changes(repo_path: &Path) -> PullfixResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
///
/// These use shell git: index removal and committing go through the same
/// code paths an operator would use by hand, including hooks and
/// repository-local configuration.
pub trait GitMutation {
    /// Remove a file from the index while keeping it on disk
    /// (`git rm --cached`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the index removal fails or the file path is
    /// invalid.
    fn untrack(repo_path: &Path, file: &Path) -> PullfixResult<()>;

    /// Create a commit with the given message from whatever is staged.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails, including when nothing is
    /// staged. Callers that want "nothing staged" to be benign must probe
    /// [`GitQuery::has_staged_changes`] first.
    fn commit(repo_path: &Path, message: &str) -> PullfixResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn is_tracked(repo_path: &Path, file: &Path) -> PullfixResult<bool> {
        let repo =
            gix::discover(repo_path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        let relative = file.strip_prefix(workdir).unwrap_or(file);
        let index = repo
            .index()
            .map_err(|e| GitError::Gix(GixError::Index(e)))?;
        let relative_bstr = gix::path::into_bstr(relative);
        Ok(index.entry_by_path(&relative_bstr).is_some())
    }

    fn has_staged_changes(repo_path: &Path) -> PullfixResult<bool> {
        // Head-vs-index comparison is still simplest through the CLI.
        ShellBackend::has_staged_changes(repo_path)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Required for index mutations and commits, where running the real tool
/// keeps behavior identical to the operator's own git.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and
    /// `GIT_TERMINAL_PROMPT=0` so nothing blocks on interactive prompts.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> PullfixResult<String> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn path_arg<'a>(file: &'a Path, command: &str) -> PullfixResult<&'a str> {
        file.to_str().ok_or_else(|| {
            GitError::CommandFailed {
                command: command.to_string(),
                message: "invalid file path".to_string(),
            }
            .into()
        })
    }
}

impl GitMutation for ShellBackend {
    fn untrack(repo_path: &Path, file: &Path) -> PullfixResult<()> {
        let file_str = Self::path_arg(file, "git rm --cached")?;
        Self::git_command(&["rm", "--cached", "--quiet", "--", file_str], repo_path)?;
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str) -> PullfixResult<()> {
        Self::git_command(&["commit", "--quiet", "-m", message], repo_path)?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn is_tracked(repo_path: &Path, file: &Path) -> PullfixResult<bool> {
        let file_str = Self::path_arg(file, "git ls-files")?;
        let output = Self::git_command(&["ls-files", "--error-unmatch", "--", file_str], repo_path);
        Ok(output.is_ok())
    }

    fn has_staged_changes(repo_path: &Path) -> PullfixResult<bool> {
        // `diff --cached --quiet` exits 0 when the index matches HEAD and
        // non-zero when something is staged (or HEAD is unborn with a
        // non-empty index).
        let output = Self::git_command(&["diff", "--cached", "--quiet"], repo_path);
        Ok(output.is_err())
    }
}

#[cfg(test)]
mod tests;

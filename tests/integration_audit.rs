// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the audit sequence.
//!
//! Runs the full audit against real temporary repositories and checks the
//! scenarios the tool exists for: fresh repo with a tracked database file,
//! re-runs (idempotence), dry runs, and benign-absent states.

use pullfix::audit::{UntrackOutcome, run_audit};
use pullfix::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory.
fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create an initialized git repo in the given directory.
fn init_test_repo(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
}

/// The blocked-pull starting point: a committed database file under
/// `schedule_bot/` with local modifications, and no ignore rules.
fn init_blocked_repo(dir: &Path) {
    init_test_repo(dir);
    fs::create_dir_all(dir.join("schedule_bot")).unwrap();
    fs::write(dir.join("schedule_bot/schedule.db"), "v1").unwrap();
    run_git(&["add", "."], dir);
    run_git(&["commit", "-q", "-m", "Initial commit"], dir);
    // Local modification, the reason `git pull` refuses to proceed.
    fs::write(dir.join("schedule_bot/schedule.db"), "v2-local").unwrap();
}

fn commit_count(dir: &Path) -> usize {
    run_git(&["rev-list", "--count", "HEAD"], dir)
        .parse()
        .expect("rev-list count should be a number")
}

#[test]
fn audit_fresh_repo_untracks_and_commits() {
    let temp = temp_dir();
    init_blocked_repo(temp.path());
    let config = Config::default();

    let report = run_audit(temp.path(), &config).unwrap();

    assert!(report.status.exists_on_disk);
    assert!(report.status.is_tracked);
    assert_eq!(report.outcome, UntrackOutcome::Committed);
    assert!(!report.rules.all_present());

    // The on-disk file with its local modifications survives.
    let content = fs::read_to_string(temp.path().join("schedule_bot/schedule.db")).unwrap();
    assert_eq!(content, "v2-local");

    // The removal is committed with the configured message.
    assert_eq!(commit_count(temp.path()), 2);
    let subject = run_git(&["log", "-1", "--pretty=%s"], temp.path());
    assert_eq!(subject, "Stop tracking schedule_bot/schedule.db");

    insta::assert_snapshot!("audit_fresh_repo_report", report.to_string());
}

#[test]
fn audit_is_idempotent() {
    let temp = temp_dir();
    init_blocked_repo(temp.path());
    let config = Config::default();

    let first = run_audit(temp.path(), &config).unwrap();
    assert_eq!(first.outcome, UntrackOutcome::Committed);

    let head_after_first = run_git(&["rev-parse", "HEAD"], temp.path());

    // The second run observes the already-fixed state and mutates nothing.
    let second = run_audit(temp.path(), &config).unwrap();
    assert!(!second.status.is_tracked);
    assert_eq!(second.outcome, UntrackOutcome::AlreadyUntracked);
    assert_eq!(run_git(&["rev-parse", "HEAD"], temp.path()), head_after_first);
    assert_eq!(commit_count(temp.path()), 2);
}

#[test]
fn audit_reports_clean_state_without_mutations() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    fs::write(
        temp.path().join(".gitignore"),
        "schedule_bot/schedule.db\n*.db\n",
    )
    .unwrap();
    run_git(&["add", ".gitignore"], temp.path());
    run_git(&["commit", "-q", "-m", "Add ignore rules"], temp.path());
    fs::create_dir_all(temp.path().join("schedule_bot")).unwrap();
    fs::write(temp.path().join("schedule_bot/schedule.db"), "local only").unwrap();

    let config = Config::default();
    let report = run_audit(temp.path(), &config).unwrap();

    assert!(report.status.exists_on_disk);
    assert!(!report.status.is_tracked);
    assert_eq!(report.outcome, UntrackOutcome::AlreadyUntracked);
    assert!(report.rules.all_present());
    assert_eq!(commit_count(temp.path()), 1, "no commit may be created");
}

#[test]
fn audit_handles_absent_target_file() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    fs::write(temp.path().join("README.md"), "# Test").unwrap();
    run_git(&["add", "."], temp.path());
    run_git(&["commit", "-q", "-m", "Initial commit"], temp.path());

    let config = Config::default();
    let report = run_audit(temp.path(), &config).unwrap();

    assert!(!report.status.exists_on_disk);
    assert!(!report.status.is_tracked);
    assert_eq!(report.outcome, UntrackOutcome::AlreadyUntracked);
}

#[test]
fn audit_dry_run_leaves_index_alone() {
    let temp = temp_dir();
    init_blocked_repo(temp.path());
    let mut config = Config::default();
    config.global.dry = true;

    let report = run_audit(temp.path(), &config).unwrap();

    assert!(report.status.is_tracked);
    assert_eq!(report.outcome, UntrackOutcome::SkippedDryRun);
    assert_eq!(commit_count(temp.path()), 1);

    // The file is still tracked, so a real run afterwards does the work.
    let real = run_audit(temp.path(), &Config::default()).unwrap();
    assert_eq!(real.outcome, UntrackOutcome::Committed);
}

#[test]
fn audit_commit_noop_when_history_never_had_the_file() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    // Staged but never committed: untracking leaves nothing to commit.
    fs::create_dir_all(temp.path().join("schedule_bot")).unwrap();
    fs::write(temp.path().join("schedule_bot/schedule.db"), "data").unwrap();
    run_git(&["add", "schedule_bot/schedule.db"], temp.path());

    let config = Config::default();
    let report = run_audit(temp.path(), &config).unwrap();

    assert!(report.status.is_tracked);
    assert_eq!(report.outcome, UntrackOutcome::NothingToCommit);
}

#[test]
fn audit_fails_outside_a_repository() {
    let temp = temp_dir();
    let config = Config::default();

    let err = run_audit(temp.path(), &config).expect_err("must fail outside a repo");
    assert!(
        err.to_string().contains("not a git repository"),
        "unexpected error: {err}"
    );
}

#[test]
fn audit_reports_partial_ignore_rules() {
    let temp = temp_dir();
    init_blocked_repo(temp.path());
    fs::write(temp.path().join(".gitignore"), "*.db\n").unwrap();

    let config = Config::default();
    let report = run_audit(temp.path(), &config).unwrap();

    assert!(!report.rules.all_present());
    // Both lines are suggested verbatim so the block can be pasted as-is.
    assert_eq!(
        report.rules.suggested_lines(),
        ["schedule_bot/schedule.db", "*.db"]
    );
}

#[test]
fn audit_respects_custom_target() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    fs::create_dir_all(temp.path().join("state")).unwrap();
    fs::write(temp.path().join("state/sessions.db"), "payload").unwrap();
    run_git(&["add", "."], temp.path());
    run_git(&["commit", "-q", "-m", "Initial commit"], temp.path());

    let mut config = Config::default();
    config.target.path = PathBuf::from("state/sessions.db");

    let report = run_audit(temp.path(), &config).unwrap();

    assert_eq!(report.outcome, UntrackOutcome::Committed);
    let subject = run_git(&["log", "-1", "--pretty=%s"], temp.path());
    assert_eq!(subject, "Stop tracking state/sessions.db");
    assert!(temp.path().join("state/sessions.db").exists());
}

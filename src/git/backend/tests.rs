// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitQuery, GixBackend, ShellBackend};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_gix_backend_not_a_repo() {
    let temp = temp_dir();
    assert!(!GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_shell_backend_not_a_repo() {
    let temp = temp_dir();
    assert!(!ShellBackend::is_git_repo(temp.path()));
}

#[test]
fn test_backends_agree_on_fresh_repo() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");

    assert!(GixBackend::is_git_repo(temp.path()));
    assert!(ShellBackend::is_git_repo(temp.path()));
}

#[test]
fn test_is_tracked_errors_outside_repo() {
    let temp = temp_dir();
    let file = temp.path().join("orphan.db");
    std::fs::write(&file, "data").expect("failed to write file");

    let result = GixBackend::is_tracked(temp.path(), &file);
    assert!(result.is_err(), "is_tracked must fail outside a repository");
}

// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!     query.rs  cmd.rs
//!        \         /
//!         v       v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation
//!   (gix, read)  (CLI, write)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .untrack
//!    .tracked    .commit
//!                .staged
//! ```
//!
//! **`GixBackend`** — pure Rust, no subprocess, read-only.
//! **`ShellBackend`** — git CLI for index removal and commits.

pub mod backend;
pub mod cmd;
pub mod query;

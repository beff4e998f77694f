// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for pullfix.
//!
//! ```text
//! Config: GlobalConfig, TargetConfig
//! target.path           the tracked file blocking the pull
//! target.ignore_file    where ignore rules are expected
//! target.commit_message defaults to "Stop tracking <path>"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate index mutations without executing them.
    pub dry: bool,
    /// Log level for stderr output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file, if file logging is wanted.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Audit target configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Repository-relative path of the tracked file to audit.
    pub path: PathBuf,
    /// Repository-relative path of the ignore-rules file.
    pub ignore_file: PathBuf,
    /// Message for the commit that records the untracking.
    /// When unset, "Stop tracking <path>" is used.
    commit_message: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("schedule_bot/schedule.db"),
            ignore_file: PathBuf::from(".gitignore"),
            commit_message: None,
        }
    }
}

impl TargetConfig {
    /// The commit message recording the untracking, resolved against the
    /// configured target path when not set explicitly.
    #[must_use]
    pub fn commit_message(&self) -> String {
        self.commit_message.clone().unwrap_or_else(|| {
            format!("Stop tracking {}", self.path.display())
        })
    }
}

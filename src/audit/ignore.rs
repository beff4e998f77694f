// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ignore-rules file inspection.
//!
//! ```text
//! expected_patterns("schedule_bot/schedule.db")
//!   → ["schedule_bot/schedule.db", "*.db"]
//!
//! scan(.gitignore, target)
//!   → IgnoreRules { rules: [{pattern, present}, ..] }
//! ```
//!
//! The scan is line-wise: comments and blank lines are skipped, a rule is
//! present when a line equals the pattern (an anchoring leading `/` is
//! accepted). The file is never written; missing rules only yield
//! suggested lines in the report.

use std::path::Path;

use crate::error::{FsError, PullfixResult};

/// Presence of one expected rule in the ignore-rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRuleState {
    /// The pattern searched for.
    pub pattern: String,
    /// Whether a matching line exists.
    pub present: bool,
}

/// Scan result over all expected rules.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    /// Whether the ignore-rules file exists at all.
    pub file_exists: bool,
    /// One state per expected pattern, in suggestion order.
    pub rules: Vec<IgnoreRuleState>,
}

impl IgnoreRules {
    /// True when every expected rule is present.
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.rules.iter().all(|r| r.present)
    }

    /// The lines the operator should append, in order. All expected
    /// patterns are suggested together so the block can be pasted as-is.
    #[must_use]
    pub fn suggested_lines(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.pattern.clone()).collect()
    }
}

/// The patterns expected in the ignore-rules file for `target`: the exact
/// relative path, and a wildcard for its extension when it has one.
#[must_use]
pub fn expected_patterns(target: &Path) -> Vec<String> {
    let mut patterns = vec![normalized(target)];
    if let Some(ext) = target.extension().and_then(|e| e.to_str()) {
        patterns.push(format!("*.{ext}"));
    }
    patterns
}

/// Scan the ignore-rules file at `ignore_path` for the rules expected for
/// `target`.
///
/// A missing file is benign: every rule is reported absent. Any other read
/// failure is an error.
///
/// # Errors
///
/// Returns an `FsError` if the file exists but cannot be read.
pub fn scan(ignore_path: &Path, target: &Path) -> PullfixResult<IgnoreRules> {
    let patterns = expected_patterns(target);

    let content = match std::fs::read_to_string(ignore_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(IgnoreRules {
                file_exists: false,
                rules: patterns
                    .into_iter()
                    .map(|pattern| IgnoreRuleState {
                        pattern,
                        present: false,
                    })
                    .collect(),
            });
        }
        Err(e) => {
            return Err(FsError::IoError {
                path: ignore_path.display().to_string(),
                source: e,
            }
            .into());
        }
    };

    let rules = patterns
        .into_iter()
        .map(|pattern| {
            let present = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .any(|line| line == pattern || line.strip_prefix('/') == Some(pattern.as_str()));
            IgnoreRuleState { pattern, present }
        })
        .collect();

    Ok(IgnoreRules {
        file_exists: true,
        rules,
    })
}

/// Render a relative path with forward slashes, as ignore rules use them
/// on every platform.
fn normalized(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}

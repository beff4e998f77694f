// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pullfix.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pullfix.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. PULLFIX_* env vars
//! 5. CLI overrides (--dry, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PULLFIX_GLOBAL__DRY=true                  → global.dry = true
//! PULLFIX_TARGET__PATH=data/cache.db        → target.path = "data/cache.db"
//! PULLFIX_GLOBAL__OUTPUT_LOG_LEVEL=4        → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub use types::{GlobalConfig, TargetConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Audit target.
    pub target: TargetConfig,
}

impl Config {
    /// Validates the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `target.path` is empty or absolute, or if
    /// `target.ignore_file` is absolute. Both must stay relative to the
    /// repository root so the audit is portable across checkouts.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.target.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "target".to_string(),
                key: "path".to_string(),
                message: "target path must not be empty".to_string(),
            }
            .into());
        }
        if self.target.path.is_absolute() {
            return Err(ConfigError::InvalidValue {
                section: "target".to_string(),
                key: "path".to_string(),
                message: format!(
                    "target path must be relative to the repository root, got '{}'",
                    self.target.path.display()
                ),
            }
            .into());
        }
        if self.target.ignore_file.is_absolute() {
            return Err(ConfigError::InvalidValue {
                section: "target".to_string(),
                key: "ignore_file".to_string(),
                message: format!(
                    "ignore file must be relative to the repository root, got '{}'",
                    self.target.ignore_file.display()
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Formats all options as `section/key=value` lines for the
    /// `options` command.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        vec![
            format!("global/dry={}", self.global.dry),
            format!(
                "global/output_log_level={}",
                self.global.output_log_level.as_u8()
            ),
            format!(
                "global/file_log_level={}",
                self.global.file_log_level.as_u8()
            ),
            format!(
                "global/log_file={}",
                self.global
                    .log_file
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string())
            ),
            format!("target/path={}", self.target.path.display()),
            format!("target/ignore_file={}", self.target.ignore_file.display()),
            format!("target/commit_message={}", self.target.commit_message()),
        ]
    }
}

// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::loader::ConfigLoader;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.target.path, PathBuf::from("schedule_bot/schedule.db"));
    assert_eq!(config.target.ignore_file, PathBuf::from(".gitignore"));
    assert_eq!(
        config.target.commit_message(),
        "Stop tracking schedule_bot/schedule.db"
    );
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert!(config.global.log_file.is_none());
}

#[test]
fn test_load_from_toml_str() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
            [global]
            dry = true
            output_log_level = 4

            [target]
            path = "data/cache.db"
            ignore_file = ".gitignore"
            commit_message = "Drop cache.db from the index"
            "#,
        )
        .build()
        .expect("config should load");

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::Debug);
    assert_eq!(config.target.path, PathBuf::from("data/cache.db"));
    assert_eq!(config.target.commit_message(), "Drop cache.db from the index");
}

#[test]
fn test_commit_message_tracks_custom_path() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
            [target]
            path = "state/sessions.db"
            "#,
        )
        .build()
        .expect("config should load");

    assert_eq!(
        config.target.commit_message(),
        "Stop tracking state/sessions.db"
    );
}

#[test]
fn test_set_override_wins_over_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false")
        .set("global.dry", true)
        .expect("override should apply")
        .build()
        .expect("config should load");

    assert!(config.global.dry);
}

#[test]
fn test_rejects_absolute_target_path() {
    let result = ConfigLoader::new()
        .add_toml_str("[target]\npath = \"/var/lib/schedule.db\"")
        .build();

    let err = result.expect_err("absolute paths must be rejected").to_string();
    assert!(
        err.contains("relative to the repository root"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_rejects_empty_target_path() {
    let result = ConfigLoader::new()
        .add_toml_str("[target]\npath = \"\"")
        .build();

    assert!(result.is_err(), "empty target path must be rejected");
}

#[test]
fn test_rejects_out_of_range_log_level() {
    let result = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 9")
        .build();

    assert!(result.is_err(), "log level 9 must be rejected");
}

#[test]
fn test_rejects_unknown_keys() {
    let result = ConfigLoader::new()
        .add_toml_str("[target]\npaht = \"typo.db\"")
        .build();

    assert!(result.is_err(), "unknown keys must be rejected");
}

#[test]
fn test_missing_required_file_errors() {
    let result = ConfigLoader::new()
        .add_toml_file("definitely/does/not/exist.toml")
        .build();

    assert!(result.is_err());
}

#[test]
fn test_format_options_lists_all_keys() {
    let config = Config::default();
    let options = config.format_options();

    for key in [
        "global/dry=",
        "global/output_log_level=",
        "global/file_log_level=",
        "global/log_file=",
        "target/path=",
        "target/ignore_file=",
        "target/commit_message=",
    ] {
        assert!(
            options.iter().any(|line| line.starts_with(key)),
            "missing option line for {key}"
        );
    }
}

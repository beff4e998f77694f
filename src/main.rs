// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Audit (default) | Options | Version
//! ```
//!
//! Exit code: 0 when the audit ran to completion (benign absences
//! included), 1 on any fatal error.

use std::process::ExitCode;

use pullfix::cli::audit::AuditArgs;
use pullfix::cli::global::GlobalOptions;
use pullfix::cli::{self, Command};
use pullfix::cmd::audit::run_audit_command;
use pullfix::cmd::config::run_options_command;
use pullfix::config::Config;
use pullfix::config::loader::ConfigLoader;
use pullfix::logging::init_logging;
use pullfix::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::Info);

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Audit(args)) => {
            load_config(&cli.global).and_then(|config| run_audit_command(args, &config))
        }
        // Bare invocation runs the audit with configured defaults.
        None => load_config(&cli.global)
            .and_then(|config| run_audit_command(&AuditArgs::default(), &config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> pullfix::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("pullfix.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader = loader.with_env_prefix("PULLFIX");
    for (key, value) in global.to_config_overrides() {
        // set_override is typed; convert flag values before handing them over.
        loader = if let Ok(b) = value.parse::<bool>() {
            loader.set(&key, b)?
        } else if let Ok(n) = value.parse::<i64>() {
            loader.set(&key, n)?
        } else {
            loader.set(&key, value.as_str())?
        };
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> pullfix::error::Result<Config> {
    let loader = build_config_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}

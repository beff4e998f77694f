// pullfix: Repository State Auditor
//
// SPDX-FileCopyrightText: 2026 Pullfix Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              audit / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-----+---------------+-----'
//!                    |               |
//!                    v               v
//!                  audit            git
//!             exists/track/     gix (reads)
//!             ignore/notice     CLI (writes)
//!
//!   +-----------------------------------------+
//!   |       foundation   error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod audit;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;

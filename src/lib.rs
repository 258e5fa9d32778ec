// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handler)
//!          |               load -> diff -> render
//!          +----------+----------+
//!                     v
//!        ,-------------------------,
//!        |          core           |
//!        |   env  snapshot  path   |
//!        |  parse  loader segment  |
//!        |           |             |
//!        |          diff           |
//!        '------------+------------'
//!                     v
//!                  render
//!            plain | bash script
//!
//!   +-----------------------------------+
//!   |  foundation     error, logging    |
//!   +-----------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod core;
pub mod error;
pub mod logging;
pub mod render;

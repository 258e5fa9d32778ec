// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable parsing and capture.
//!
//! # Architecture
//!
//! ```text
//! parse_line("NAME=VALUE\n") -> Option<EnvVar>
//!   no '='        -> None (skipped, not an error)
//!   denylisted    -> None (_, PWD, OLDPWD)
//!   otherwise     -> EnvVar, value cut at first \r or \n
//! current_vars() -> Vec<EnvVar> (process env, denylist applied)
//! ```

pub mod types;


pub use types::EnvVar;

/// Variable names that never participate in a diff.
///
/// These are shell bookkeeping variables that differ between any two
/// sessions and would only produce noise.
pub const SKIP_VARS: [&str; 3] = ["_", "PWD", "OLDPWD"];

/// Parses one `NAME=VALUE` line into a variable.
///
/// Returns `None` for lines without a `=` and for denylisted names; both
/// are silently skipped by callers. The value ends at the first carriage
/// return or newline, so a trailing `\n` or `\r\n` terminator is never
/// part of it.
#[must_use]
pub fn parse_line(line: &str) -> Option<EnvVar> {
    let (name, rest) = line.split_once('=')?;

    if SKIP_VARS.contains(&name) {
        return None;
    }

    let value = match rest.find(['\r', '\n']) {
        Some(end) => &rest[..end],
        None => rest,
    };

    Some(EnvVar::new(name, value))
}

/// Captures the current process environment in iteration order.
///
/// The same denylist as [`parse_line`] is applied, so both sides of the
/// diff see an identical filter.
#[must_use]
pub fn current_vars() -> Vec<EnvVar> {
    std::env::vars()
        .filter(|(name, _)| !SKIP_VARS.contains(&name.as_str()))
        .map(|(name, value)| EnvVar::new(name, value))
        .collect()
}

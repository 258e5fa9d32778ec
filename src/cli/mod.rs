// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for env-diff-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! env-diff [options] <prev-env.txt>
//!   -s / --script   bash script instead of NAME=VALUE entries
//!   -p / --patch    patch $PATH instead of setting it (needs -s)
//!   -b / --begin    new $PATH entries first (needs -p)
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::path::PathBuf;

/// Environment Variable Diff Tool - Rust Port
///
/// Prints the difference between a saved environment and the current one.
#[derive(Debug, Parser)]
#[command(
    name = "env-diff",
    author,
    version,
    about = "Environment variable diff tool",
    long_about = "env-diff-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Gets the difference between a previous environment (generated\n\
                  by the `env` command) and the current one and prints it to\n\
                  stdout, either as plain NAME=VALUE entries or as a bash script\n\
                  fragment suitable for `eval`.",
    after_help = "TYPICAL USE:\n\n\
                  Capture the environment before some setup script runs with\n\
                  `env > prev-env.txt`, run the script, then `env-diff -s\n\
                  prev-env.txt` to get an executable fragment that reproduces\n\
                  what the script changed. Add -p to extend $PATH instead of\n\
                  overwriting it, and -b to put new entries in front."
)]
pub struct Cli {
    /// Global options shared by all modes
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Previous-environment snapshot file, as produced by `env`.
    #[arg(value_name = "PREV_ENV")]
    pub snapshot: PathBuf,

    /// Makes a bash script instead of NAME=VALUE entries.
    #[arg(short = 's', long)]
    pub script: bool,

    /// Tries to patch $PATH instead of setting its value.
    #[arg(short = 'p', long, requires = "script")]
    pub patch: bool,

    /// Places new entries of $PATH at the beginning (default is end).
    #[arg(short = 'b', long, requires = "patch")]
    pub begin: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

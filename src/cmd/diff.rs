// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diff command implementation: load snapshot, capture the current
//! environment, diff, render to stdout.

use std::io::Write;

use anyhow::Context;

use crate::cli::Cli;
use crate::core::diff;
use crate::core::env::{self, EnvVar};
use crate::core::snapshot::Snapshot;
use crate::error::Result;
use crate::render::{self, OutputMode, Placement};

/// Main handler for the diff run.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or stdout cannot be
/// written to.
pub fn run_diff_command(cli: &Cli) -> Result<()> {
    let snapshot = Snapshot::load(&cli.snapshot)?;
    let current = env::current_vars();
    tracing::debug!(
        "snapshot has {} variables, current environment has {}",
        snapshot.len(),
        current.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_diff(&mut out, &snapshot, &current, cli).context("failed to write diff to stdout")
}

/// Diffs `current` against `snapshot` and renders the result to `out`
/// with the presentation the CLI flags ask for.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_diff<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    current: &[EnvVar],
    cli: &Cli,
) -> std::io::Result<()> {
    let entries = diff::diff(snapshot, current, cli.patch);

    let mode = if cli.script {
        OutputMode::Script
    } else {
        OutputMode::Plain
    };
    let placement = if cli.begin {
        Placement::Prepend
    } else {
        Placement::Append
    };

    render::render_entries(out, &entries, mode, placement)
}

// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The diff engine.
//!
//! # Architecture
//!
//! ```text
//! diff(snapshot, current, path_patch)
//!   for each current var (in env order):
//!     snapshot hit, equal value  -> nothing
//!     snapshot miss              -> Added
//!     snapshot hit, differs      -> Changed
//!     PATH + patch semantics     -> PathDelta(added segments)
//! ```
//!
//! The walk is one-directional: variables that exist only in the
//! snapshot are never reported. The tool answers "what changed or was
//! introduced since the snapshot", not "what disappeared".

use crate::core::env::EnvVar;
use crate::core::path;
use crate::core::snapshot::Snapshot;


/// The only variable that gets segment-delta treatment under patch
/// semantics. Exact match; `MANPATH` and friends are replaced whole.
pub const PATH_VAR: &str = "PATH";

/// One reported difference between snapshot and current environment.
///
/// Unchanged variables produce no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    /// Variable absent from the snapshot.
    Added { name: String, value: String },

    /// Variable present in the snapshot with a different value.
    Changed {
        name: String,
        value: String,
        previous: String,
    },

    /// `PATH` under patch semantics: the ordered segments of the current
    /// value that the snapshot value lacks.
    PathDelta {
        name: String,
        value: String,
        added: Vec<String>,
    },
}

impl DiffEntry {
    /// Variable name this entry refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Added { name, .. } | Self::Changed { name, .. } | Self::PathDelta { name, .. } => {
                name
            }
        }
    }

    /// Full current value of the variable.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Added { value, .. }
            | Self::Changed { value, .. }
            | Self::PathDelta { value, .. } => value,
        }
    }
}

/// Diffs the current environment against a snapshot.
///
/// Entries come out in current-environment iteration order, one per
/// added or changed variable. With `path_patch` set, a differing `PATH`
/// becomes a [`DiffEntry::PathDelta`]; a `PATH` missing from the
/// snapshot is treated as an empty old path, so every current segment
/// counts as added.
#[must_use]
pub fn diff(snapshot: &Snapshot, current: &[EnvVar], path_patch: bool) -> Vec<DiffEntry> {
    let mut entries = Vec::new();

    for var in current {
        let patch_this = path_patch && var.name == PATH_VAR;

        match snapshot.get(&var.name) {
            Some(previous) if previous == var.value => {}
            Some(previous) => {
                if patch_this {
                    entries.push(path_delta(var, previous));
                } else {
                    entries.push(DiffEntry::Changed {
                        name: var.name.clone(),
                        value: var.value.clone(),
                        previous: previous.to_owned(),
                    });
                }
            }
            None => {
                if patch_this {
                    entries.push(path_delta(var, ""));
                } else {
                    entries.push(DiffEntry::Added {
                        name: var.name.clone(),
                        value: var.value.clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        "{} of {} current variables differ from the snapshot",
        entries.len(),
        current.len()
    );

    entries
}

fn path_delta(var: &EnvVar, previous: &str) -> DiffEntry {
    DiffEntry::PathDelta {
        name: var.name.clone(),
        value: var.value.clone(),
        added: path::added_segments(previous, &var.value),
    }
}

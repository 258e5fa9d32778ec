// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot loading.
//!
//! # Architecture
//!
//! ```text
//! Snapshot::load(path)
//!   File::open -> SnapshotError::Open (fatal)
//!   BufReader lines
//!     > MAX_LINE_LEN      -> SnapshotError::LineTooLong (fatal)
//!     parse_line == None  -> skipped (malformed or denylisted)
//!     duplicate name      -> first occurrence wins
//! ```
//!
//! A snapshot is built once and never mutated afterwards.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use crate::core::env::{self, EnvVar};
use crate::error::SnapshotError;


/// Maximum accepted length of a single snapshot line, in bytes.
///
/// Lines are read into a growable buffer, but anything beyond this bound
/// is rejected with [`SnapshotError::LineTooLong`] rather than truncated;
/// `env` output never comes close to it.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// A previously captured environment, loaded from an `env` dump.
///
/// Names map to the value of their first occurrence in the file. Lookup
/// order does not matter for output; the diff always walks the current
/// environment, not the snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// Loads a snapshot from a file of `NAME=VALUE` lines.
    ///
    /// Malformed and denylisted lines are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] if the file cannot be opened,
    /// [`SnapshotError::Read`] on a mid-file read failure and
    /// [`SnapshotError::LineTooLong`] for lines over [`MAX_LINE_LEN`].
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let file = std::fs::File::open(path).map_err(|source| SnapshotError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let reader = std::io::BufReader::new(file);
        let mut vars = BTreeMap::new();
        let mut parsed = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| SnapshotError::Read {
                path: path.display().to_string(),
                source,
            })?;

            if line.len() > MAX_LINE_LEN {
                return Err(SnapshotError::LineTooLong {
                    path: path.display().to_string(),
                    line: index + 1,
                    limit: MAX_LINE_LEN,
                });
            }

            if let Some(var) = env::parse_line(&line) {
                parsed += 1;
                vars.entry(var.name).or_insert(var.value);
            }
        }

        tracing::debug!(
            "loaded {} variables ({} lines kept) from {}",
            vars.len(),
            parsed,
            path.display()
        );

        Ok(Self { vars })
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of distinct variables in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<EnvVar> for Snapshot {
    /// Builds a snapshot from parsed variables, first occurrence winning.
    fn from_iter<I: IntoIterator<Item = EnvVar>>(iter: I) -> Self {
        let mut vars = BTreeMap::new();
        for var in iter {
            vars.entry(var.name).or_insert(var.value);
        }
        Self { vars }
    }
}

// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvDiffError (~24 bytes)
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!   Bailed  Snapshot  Io/Other
//!  Box<str>   Box    Box/Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Snapshot  Open, Read, LineTooLong
//!
//! All variants boxed => EnvDiffError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvDiffError`].
pub type EnvDiffResult<T> = std::result::Result<T, EnvDiffError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvDiffError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Snapshot file could not be loaded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] Box<SnapshotError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`EnvDiffError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvDiffError {
    EnvDiffError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvDiffError {
                fn from(err: $error) -> Self {
                    EnvDiffError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SnapshotError => Snapshot,
    std::io::Error => Io,
}

// --- Snapshot Errors ---

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be opened.
    #[error("cannot open snapshot file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the snapshot file failed mid-stream.
    #[error("failed to read snapshot file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line exceeded the maximum supported length.
    #[error("line {line} in '{path}' exceeds the {limit}-byte limit")]
    LineTooLong {
        path: String,
        line: usize,
        limit: usize,
    },
}

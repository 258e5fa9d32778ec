// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diff rendering.
//!
//! # Architecture
//!
//! ```text
//! OutputMode: Plain  -> NAME=VALUE
//!             Script -> export NAME="VALUE"   (" escaped as \")
//! PathDelta in script mode keeps a $PATH reference:
//!   Append  -> export PATH="$PATH:new1:new2"
//!   Prepend -> export PATH="new1:new2:$PATH"
//! ```
//!
//! Script output must stay valid when sourced in a fresh shell, which is
//! why patch lines reference `$PATH` instead of expanding it.

use std::io::{self, Write};

use crate::core::diff::DiffEntry;

#[cfg(test)]
mod tests;

/// Presentation mode for the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain `NAME=VALUE` lines.
    #[default]
    Plain,
    /// Executable `export` statements.
    Script,
}

/// Where new `PATH` segments land relative to the existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// After the `$PATH` reference (default).
    #[default]
    Append,
    /// Before the `$PATH` reference.
    Prepend,
}

/// Escapes a value for inclusion inside a double-quoted shell string.
///
/// Deliberately minimal: a literal `"` gains a backslash, nothing else is
/// touched. The input format guarantees no newlines, and `$`/backtick
/// expansion inside values is accepted behavior of the original tool.
#[must_use]
pub fn escape_double_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Writes the diff entries to `out`, one line per entry, in the order
/// the diff engine produced them.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render_entries<W: Write>(
    out: &mut W,
    entries: &[DiffEntry],
    mode: OutputMode,
    placement: Placement,
) -> io::Result<()> {
    for entry in entries {
        match mode {
            OutputMode::Plain => writeln!(out, "{}={}", entry.name(), entry.value())?,
            OutputMode::Script => write_script_line(out, entry, placement)?,
        }
    }
    Ok(())
}

fn write_script_line<W: Write>(
    out: &mut W,
    entry: &DiffEntry,
    placement: Placement,
) -> io::Result<()> {
    match entry {
        DiffEntry::PathDelta { name, added, .. } => {
            let reference = format!("${name}");
            let value = if added.is_empty() {
                // Nothing new, but the value still differed (removal or
                // reorder); keep the statement a no-op
                reference
            } else {
                let joined = added
                    .iter()
                    .map(|segment| escape_double_quotes(segment))
                    .collect::<Vec<_>>()
                    .join(":");
                match placement {
                    Placement::Append => format!("{reference}:{joined}"),
                    Placement::Prepend => format!("{joined}:{reference}"),
                }
            };
            writeln!(out, "export {name}=\"{value}\"")
        }
        DiffEntry::Added { name, value } | DiffEntry::Changed { name, value, .. } => {
            writeln!(out, "export {name}=\"{}\"", escape_double_quotes(value))
        }
    }
}

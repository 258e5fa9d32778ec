// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PATH segmentation and ordered segment deltas.
//!
//! # Architecture
//!
//! ```text
//! split_segments("/a::/b")       -> ["/a", "", "/b"]
//! added_segments("/a:/b",
//!                "/a:/c:/b:/c") -> ["/c", "/c"]
//! ```
//!
//! Segments keep their original order and duplicates; empty segments
//! (consecutive, leading or trailing colons) are preserved, matching
//! literal colon-delimited semantics.


/// Splits a colon-delimited value into its ordered segments.
///
/// An empty input produces an empty sequence rather than one empty
/// segment.
#[must_use]
pub fn split_segments(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(':').map(str::to_owned).collect()
}

/// Collects the segments of `new` that are absent from `old`.
///
/// Membership is exact string equality against `old`'s segment set; the
/// result keeps the appearance order of `new`, duplicates included.
#[must_use]
pub fn added_segments(old: &str, new: &str) -> Vec<String> {
    let old_segments = split_segments(old);

    // Environments hold tens of segments at most, a linear scan beats
    // building an index
    split_segments(new)
        .into_iter()
        .filter(|segment| !old_segments.contains(segment))
        .collect()
}

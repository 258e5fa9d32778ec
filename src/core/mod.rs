// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core diff machinery: variable parsing, snapshot loading, PATH
//! segmentation and the diff engine itself.

pub mod diff;
pub mod env;
pub mod path;
pub mod snapshot;

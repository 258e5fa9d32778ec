// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests: snapshot file on disk, a synthetic current
//! environment, and the rendered output for every mode.

use clap::Parser;
use env_diff_rs::cli::Cli;
use env_diff_rs::cmd::diff::write_diff;
use env_diff_rs::core::env::EnvVar;
use env_diff_rs::core::snapshot::Snapshot;
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(snapshot_contents: &str, current: &[EnvVar], flags: &[&str]) -> String {
    let file = snapshot_file(snapshot_contents);
    let snapshot = Snapshot::load(file.path()).unwrap();

    let mut args = vec!["env-diff"];
    args.extend_from_slice(flags);
    let path = file.path().to_str().unwrap().to_owned();
    args.push(&path);
    let cli = Cli::try_parse_from(args).unwrap();

    let mut out = Vec::new();
    write_diff(&mut out, &snapshot, current, &cli).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Plain Mode
// =============================================================================

#[test]
fn plain_reports_added_and_changed() {
    let current = [
        EnvVar::new("UNCHANGED", "same"),
        EnvVar::new("CHANGED", "new"),
        EnvVar::new("ADDED", "fresh"),
    ];
    let output = run("UNCHANGED=same\nCHANGED=old\n", &current, &[]);
    assert_eq!(output, "CHANGED=new\nADDED=fresh\n");
}

#[test]
fn plain_never_reports_deletions() {
    let current = [EnvVar::new("KEPT", "1")];
    let output = run("FOO=bar\nKEPT=1\n", &current, &[]);
    assert_eq!(output, "", "FOO disappeared but must not be reported");
}

#[test]
fn plain_identical_environments_print_nothing() {
    let current = [EnvVar::new("A", "1"), EnvVar::new("B", "2")];
    let output = run("A=1\nB=2\n", &current, &[]);
    assert!(output.is_empty());
}

// =============================================================================
// Script Mode
// =============================================================================

#[test]
fn script_exports_changed_variables() {
    let current = [EnvVar::new("GREETING", r#"say "hi""#)];
    let output = run("GREETING=hello\n", &current, &["-s"]);
    assert_eq!(output, "export GREETING=\"say \\\"hi\\\"\"\n");
}

#[test]
fn script_without_patch_replaces_path_wholesale() {
    let current = [EnvVar::new("PATH", "/usr/bin:/opt/bin")];
    let output = run("PATH=/usr/bin\n", &current, &["-s"]);
    assert_eq!(output, "export PATH=\"/usr/bin:/opt/bin\"\n");
}

// =============================================================================
// PATH Patch Mode
// =============================================================================

#[test]
fn patch_append_extends_existing_path() {
    let current = [EnvVar::new("PATH", "/usr/bin:/opt/bin")];
    let output = run("PATH=/usr/bin\n", &current, &["-s", "-p"]);
    assert_eq!(output, "export PATH=\"$PATH:/opt/bin\"\n");
}

#[test]
fn patch_begin_prefixes_new_segments() {
    let current = [EnvVar::new("PATH", "/usr/bin:/opt/bin")];
    let output = run("PATH=/usr/bin\n", &current, &["-s", "-p", "-b"]);
    assert_eq!(output, "export PATH=\"/opt/bin:$PATH\"\n");
}

#[test]
fn patch_keeps_duplicate_new_segments_in_order() {
    let current = [EnvVar::new("PATH", "/a:/c:/b:/c")];
    let output = run("PATH=/a:/b\n", &current, &["-s", "-p"]);
    assert_eq!(output, "export PATH=\"$PATH:/c:/c\"\n");
}

#[test]
fn patch_with_path_missing_from_snapshot_adds_everything() {
    let current = [EnvVar::new("PATH", "/usr/bin:/opt/bin")];
    let output = run("OTHER=1\n", &current, &["-s", "-p"]);
    assert_eq!(
        output,
        "export PATH=\"$PATH:/usr/bin:/opt/bin\"\n",
        "absent snapshot PATH diffs against an empty old path"
    );
}

#[test]
fn patch_leaves_other_variables_alone() {
    let current = [
        EnvVar::new("PATH", "/usr/bin:/opt/bin"),
        EnvVar::new("MANPATH", "/man:/opt/man"),
    ];
    let output = run("PATH=/usr/bin\nMANPATH=/man\n", &current, &["-s", "-p"]);
    assert_eq!(
        output,
        "export PATH=\"$PATH:/opt/bin\"\nexport MANPATH=\"/man:/opt/man\"\n"
    );
}

// =============================================================================
// Snapshot Handling
// =============================================================================

#[test]
fn denylisted_snapshot_entries_never_resurface() {
    // PWD differs on both sides but is filtered everywhere
    let current = [EnvVar::new("HOME", "/home/user")];
    let output = run("PWD=/somewhere\nHOME=/home/user\n", &current, &[]);
    assert!(output.is_empty());
}

#[test]
fn duplicate_snapshot_entries_diff_against_the_first() {
    let current = [EnvVar::new("DUP", "second")];
    let output = run("DUP=first\nDUP=second\n", &current, &[]);
    assert_eq!(output, "DUP=second\n", "first occurrence wins in the snapshot");
}

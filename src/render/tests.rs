// env-diff-rs: Environment Variable Diff Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{OutputMode, Placement, escape_double_quotes, render_entries};
use crate::core::diff::DiffEntry;
use crate::core::env::parse_line;

fn render(entries: &[DiffEntry], mode: OutputMode, placement: Placement) -> String {
    let mut out = Vec::new();
    render_entries(&mut out, entries, mode, placement).unwrap();
    String::from_utf8(out).unwrap()
}

fn added(name: &str, value: &str) -> DiffEntry {
    DiffEntry::Added {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_plain_mode_renders_assignments_in_order() {
    let entries = [added("FOO", "bar"), added("BAZ", "qux")];
    let output = render(&entries, OutputMode::Plain, Placement::Append);
    assert_eq!(output, "FOO=bar\nBAZ=qux\n");
}

#[test]
fn test_plain_mode_round_trips_through_the_parser() {
    let entries = [added("FOO", "a:b=c")];
    let output = render(&entries, OutputMode::Plain, Placement::Append);

    let reparsed = parse_line(output.trim_end()).unwrap();
    assert_eq!(reparsed.name, "FOO");
    assert_eq!(reparsed.value, "a:b=c");
}

#[test]
fn test_script_mode_exports_with_quotes() {
    let entries = [added("FOO", "bar")];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    insta::assert_snapshot!(output.trim_end(), @r#"export FOO="bar""#);
}

#[test]
fn test_script_mode_escapes_double_quotes_only() {
    let entries = [added("MSG", r#"say "hi" $HOME"#)];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    insta::assert_snapshot!(output.trim_end(), @r#"export MSG="say \"hi\" $HOME""#);
}

#[test]
fn test_escape_double_quotes_rule() {
    assert_eq!(escape_double_quotes(r#"a"b"#), r#"a\"b"#);
    assert_eq!(escape_double_quotes("plain"), "plain");
    // Backslashes and dollar signs pass through untouched
    assert_eq!(escape_double_quotes(r"a\b$c"), r"a\b$c");
}

#[test]
fn test_changed_renders_like_added_in_script_mode() {
    let entries = [DiffEntry::Changed {
        name: "FOO".to_string(),
        value: "new".to_string(),
        previous: "old".to_string(),
    }];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    assert_eq!(output, "export FOO=\"new\"\n");
}

#[test]
fn test_path_delta_append_references_existing_path() {
    let entries = [DiffEntry::PathDelta {
        name: "PATH".to_string(),
        value: "/usr/bin:/opt/bin".to_string(),
        added: vec!["/opt/bin".to_string()],
    }];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    insta::assert_snapshot!(output.trim_end(), @r#"export PATH="$PATH:/opt/bin""#);
}

#[test]
fn test_path_delta_prepend_puts_segments_first() {
    let entries = [DiffEntry::PathDelta {
        name: "PATH".to_string(),
        value: "/opt/bin:/usr/bin".to_string(),
        added: vec!["/opt/bin".to_string()],
    }];
    let output = render(&entries, OutputMode::Script, Placement::Prepend);
    insta::assert_snapshot!(output.trim_end(), @r#"export PATH="/opt/bin:$PATH""#);
}

#[test]
fn test_path_delta_joins_multiple_segments() {
    let entries = [DiffEntry::PathDelta {
        name: "PATH".to_string(),
        value: "/a:/b:/c".to_string(),
        added: vec!["/b".to_string(), "/c".to_string()],
    }];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    assert_eq!(output, "export PATH=\"$PATH:/b:/c\"\n");
}

#[test]
fn test_path_delta_with_no_additions_is_a_no_op_statement() {
    let entries = [DiffEntry::PathDelta {
        name: "PATH".to_string(),
        value: "/a".to_string(),
        added: Vec::new(),
    }];
    let output = render(&entries, OutputMode::Script, Placement::Append);
    assert_eq!(output, "export PATH=\"$PATH\"\n");
}

#[test]
fn test_path_delta_in_plain_mode_falls_back_to_full_value() {
    // -p requires -s at the CLI, but the renderer stays total anyway
    let entries = [DiffEntry::PathDelta {
        name: "PATH".to_string(),
        value: "/a:/b".to_string(),
        added: vec!["/b".to_string()],
    }];
    let output = render(&entries, OutputMode::Plain, Placement::Append);
    assert_eq!(output, "PATH=/a:/b\n");
}

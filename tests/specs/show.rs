// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf show` specs

use crate::support::{stdout, Sysconf};

#[test]
fn show_renders_the_last_applied_document_by_default() {
    let sysconf = Sysconf::new();
    sysconf.write_history(
        r#"version: "1"
config:
  - apt:
      - htop
"#,
    );

    let output = sysconf.run(&["show"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("apt"));
    assert!(text.contains("htop"));
}

#[test]
fn show_accepts_an_explicit_path() {
    let sysconf = Sysconf::new();
    let path = sysconf.home.path().join("custom.yaml");
    std::fs::write(&path, "version: \"1\"\n").expect("write custom config");

    let output = sysconf.run(&["show", path.to_str().expect("utf8 path")]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("version"));
}

#[test]
fn show_fails_on_a_missing_document() {
    let sysconf = Sysconf::new();
    let output = sysconf.run(&["show"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn show_fails_with_a_parse_error_exit_code_on_an_unsupported_version() {
    let sysconf = Sysconf::new();
    sysconf.write_history("version: \"99\"\n");

    let output = sysconf.run(&["show"]);
    assert_eq!(output.status.code(), Some(3));
}

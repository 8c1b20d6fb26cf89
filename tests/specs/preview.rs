// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf preview` specs

use crate::support::{stdout, Sysconf};

#[test]
fn preview_prints_the_commands_a_new_entry_would_run_without_executing_them() {
    let sysconf = Sysconf::new();
    sysconf.write_config(
        r#"version: "1"
config:
  - apt:
      - htop
"#,
    );

    let output = sysconf.run(&["preview"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("apt install"));
}

#[test]
fn preview_reports_no_changes_required_when_history_matches_the_target() {
    let sysconf = Sysconf::new();
    let document = "version: \"1\"\nconfig:\n  - apt:\n      - htop\n";
    sysconf.write_config(document);
    sysconf.write_history(document);

    let output = sysconf.run(&["preview"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("# No changes required."));
}

#[test]
fn preview_never_writes_the_history_file() {
    let sysconf = Sysconf::new();
    sysconf.write_config(
        r#"version: "1"
config:
  - apt:
      - htop
"#,
    );

    sysconf.run(&["preview"]);
    assert!(!sysconf.history_path().exists());
}

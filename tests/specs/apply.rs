// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sysconf apply` specs. Only exercises no-op and failure paths: a
//! real divergent `apply` would shell out to system package managers,
//! which these specs must not do.

use crate::support::Sysconf;

#[test]
fn apply_is_a_noop_and_still_persists_history_when_nothing_changed() {
    let sysconf = Sysconf::new();
    let document = "version: \"1\"\nconfig:\n  - apt:\n      - htop\n";
    sysconf.write_config(document);
    sysconf.write_history(document);

    let output = sysconf.run(&["apply"]);
    assert!(output.status.success());
    assert!(sysconf.history_path().exists());
}

#[test]
fn apply_fails_on_a_missing_target_document() {
    let sysconf = Sysconf::new();
    let output = sysconf.run(&["apply"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn apply_fails_with_a_parse_error_exit_code_on_an_unsupported_version() {
    let sysconf = Sysconf::new();
    sysconf.write_config("version: \"99\"\n");

    let output = sysconf.run(&["apply"]);
    assert_eq!(output.status.code(), Some(3));
}

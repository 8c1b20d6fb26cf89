// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use super::*;

#[test]
fn show_with_no_path_defaults_to_none() {
    let cli = Cli::parse_from(["sysconf", "show"]);
    assert!(matches!(cli.command, Command::Show { path: None }));
}

#[test]
fn show_accepts_an_explicit_path() {
    let cli = Cli::parse_from(["sysconf", "show", "/tmp/config.yaml"]);
    let Command::Show { path } = cli.command else { panic!("expected Show") };
    assert_eq!(path, Some(std::path::PathBuf::from("/tmp/config.yaml")));
}

#[test]
fn apply_accepts_last_config_as_a_long_flag() {
    let cli = Cli::parse_from(["sysconf", "apply", "new.yaml", "--last-config", "old.yaml"]);
    let Command::Apply { config_file, last_config } = cli.command else { panic!("expected Apply") };
    assert_eq!(config_file, Some(std::path::PathBuf::from("new.yaml")));
    assert_eq!(last_config, Some(std::path::PathBuf::from("old.yaml")));
}

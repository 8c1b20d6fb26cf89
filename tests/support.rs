// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared `assert_cmd` plumbing for the `sysconf` binary specs.

use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `sysconf` invocation scoped to its own config directory, so specs
/// never touch the real `~/.config/system-config-manager`.
pub struct Sysconf {
    pub home: TempDir,
}

impl Sysconf {
    pub fn new() -> Self {
        Sysconf { home: TempDir::new().expect("tempdir") }
    }

    pub fn config_dir(&self) -> std::path::PathBuf {
        self.home.path().join("system-config-manager")
    }

    pub fn write_config(&self, contents: &str) {
        let path = self.config_dir().join("config.yaml");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(path, contents).expect("write config");
    }

    pub fn write_history(&self, contents: &str) {
        let path = self.config_dir().join(".history").join("current.yaml");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(path, contents).expect("write history");
    }

    pub fn history_path(&self) -> std::path::PathBuf {
        self.config_dir().join(".history").join("current.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::cargo_bin("sysconf")
            .expect("sysconf binary")
            .env("XDG_CONFIG_HOME", self.home.path())
            .args(args)
            .output()
            .expect("run sysconf")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

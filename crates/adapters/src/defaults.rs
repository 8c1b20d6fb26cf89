// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default paths (§6): the config directory, the history file
//! (`old_config_path`), and the document a bare `apply`/`preview`
//! targets (`new_config_path`).

use std::path::PathBuf;

/// Where defaulted paths live. `config_dir` is the only thing an
/// implementation must supply; the other two are derived from it.
pub trait Defaults {
    fn config_dir(&self) -> PathBuf;

    fn old_config_path(&self) -> PathBuf {
        self.config_dir().join(".history").join("current.yaml")
    }

    fn new_config_path(&self) -> PathBuf {
        self.config_dir().join("config.yaml")
    }
}

/// Resolves the config directory under the user's home, via `dirs`
/// (already the teacher's own choice for config-directory resolution).
#[derive(Debug, Default, Clone, Copy)]
pub struct HomeDefaults;

impl Defaults for HomeDefaults {
    fn config_dir(&self) -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"));
        base.join("system-config-manager")
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

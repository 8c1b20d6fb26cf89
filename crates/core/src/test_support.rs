// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-only builders shared across crates that exercise `SystemConfig`.

use crate::entry::DomainConfigEntry;
use crate::path::Path;
use crate::system_config::SystemConfig;
use crate::yaml_value::YamlValue;

impl SystemConfig {
    /// Insert a list entry, returning `self` for chaining in test setup.
    pub fn with_list_entry(mut self, domain_key: &str, path: &[&str], value: &str) -> Self {
        let entry = DomainConfigEntry::List {
            domain_key: domain_key.to_string(),
            path: Path::from_segments(path.iter().copied()),
            value: value.to_string(),
        };
        self.entries.insert(entry.id(), entry);
        self
    }

    /// Insert a map entry, returning `self` for chaining in test setup.
    pub fn with_map_entry(mut self, domain_key: &str, path: &[&str], value: YamlValue) -> Self {
        let entry = DomainConfigEntry::Map {
            domain_key: domain_key.to_string(),
            path: Path::from_segments(path.iter().copied()),
            value,
        };
        self.entries.insert(entry.id(), entry);
        self
    }
}

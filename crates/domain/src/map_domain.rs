// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Map-domain shape (§4.5, §4.6): one entry per path, payload is not
//! part of identity, so a changed value at the same path is an
//! Update rather than a Remove+Add.

use indexmap::IndexMap;
use scm_core::{rebuild, Action, DomainConfigEntry, Path, Runnable, YamlValue};
use scm_shell::template::{interpolate, Interpolation};

use crate::domain::{Domain, DomainError};

/// Flatten `subtree` into one [`DomainConfigEntry::Map`] per leaf path.
/// Shared by [`ShellMapDomain`] and the dconf/gsettings encoded-command
/// domains, which differ only in how they turn a diffed pair into an
/// [`Action`].
pub(crate) fn parse_map(
    domain_key: &str,
    depth: usize,
    subtree: &YamlValue,
) -> Result<Vec<DomainConfigEntry>, DomainError> {
    scm_core::flatten(subtree, depth)?
        .into_iter()
        .map(|(path, value)| Ok(DomainConfigEntry::Map { domain_key: domain_key.to_string(), path, value }))
        .collect()
}

pub(crate) fn render_map(entries: &[DomainConfigEntry]) -> YamlValue {
    let mut grouped: IndexMap<Path, YamlValue> = IndexMap::new();
    for entry in entries {
        if let DomainConfigEntry::Map { path, value, .. } = entry {
            grouped.insert(path.clone(), value.clone());
        }
    }
    rebuild(grouped).unwrap_or(YamlValue::Null)
}

pub(crate) fn map_value(entry: &DomainConfigEntry) -> &YamlValue {
    match entry {
        DomainConfigEntry::Map { value, .. } => value,
        DomainConfigEntry::List { .. } => unreachable!("map domain never produces list entries"),
    }
}

#[derive(Debug, Clone)]
pub struct ShellMapDomain {
    key: String,
    depth: usize,
    add_script: String,
    update_script: String,
    remove_script: String,
}

impl ShellMapDomain {
    pub fn new(
        key: impl Into<String>,
        depth: usize,
        add_script: impl Into<String>,
        update_script: impl Into<String>,
        remove_script: impl Into<String>,
    ) -> Self {
        ShellMapDomain {
            key: key.into(),
            depth,
            add_script: add_script.into(),
            update_script: update_script.into(),
            remove_script: remove_script.into(),
        }
    }
}

impl Domain for ShellMapDomain {
    fn key(&self) -> &str {
        &self.key
    }

    fn path_depth(&self) -> usize {
        self.depth
    }

    fn parse(&self, subtree: &YamlValue) -> Result<Vec<DomainConfigEntry>, DomainError> {
        parse_map(&self.key, self.depth, subtree)
    }

    fn render(&self, entries: &[DomainConfigEntry]) -> YamlValue {
        render_map(entries)
    }

    fn diff_action(&self, old: Option<&DomainConfigEntry>, new: Option<&DomainConfigEntry>) -> Action {
        match (old, new) {
            (None, Some(new_entry)) => {
                let value = map_value(new_entry).to_display_string();
                let vars = Interpolation::for_add(new_entry.path().segments(), &value);
                Action::Add {
                    new_entry: new_entry.clone(),
                    run: Runnable::Shell(interpolate(&self.add_script, &vars)),
                }
            }
            (Some(old_entry), None) => {
                let value = map_value(old_entry).to_display_string();
                let vars = Interpolation::for_remove(old_entry.path().segments(), &value);
                Action::Remove {
                    old_entry: old_entry.clone(),
                    run: Runnable::Shell(interpolate(&self.remove_script, &vars)),
                }
            }
            (Some(old_entry), Some(new_entry)) if map_value(old_entry) != map_value(new_entry) => {
                let old_value = map_value(old_entry).to_display_string();
                let new_value = map_value(new_entry).to_display_string();
                let vars = Interpolation::for_update(new_entry.path().segments(), &old_value, &new_value);
                Action::Update {
                    old_entry: old_entry.clone(),
                    new_entry: new_entry.clone(),
                    run: Runnable::Shell(interpolate(&self.update_script, &vars)),
                }
            }
            (Some(old_entry), Some(new_entry)) => {
                Action::NoOp { old_entry: old_entry.clone(), new_entry: new_entry.clone() }
            }
            (None, None) => unreachable!("diff_action is never called with both sides absent"),
        }
    }
}

#[cfg(test)]
#[path = "map_domain_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List-domain shape (§4.5, §4.6): a flat set of `(path, item)` pairs
//! whose membership is tracked by shelling out to an add/remove
//! script per item. Value is part of the entry's identity, so
//! `diff_action` only ever produces Add, Remove, or NoOp.

use indexmap::IndexMap;
use scm_core::{rebuild, Action, DomainConfigEntry, Path, Runnable, YamlValue};
use scm_shell::template::{interpolate, Interpolation};

use crate::domain::{yaml_type_name, Domain, DomainError};

#[derive(Debug, Clone)]
pub struct ShellListDomain {
    key: String,
    depth: usize,
    add_script: String,
    remove_script: String,
}

impl ShellListDomain {
    pub fn new(
        key: impl Into<String>,
        depth: usize,
        add_script: impl Into<String>,
        remove_script: impl Into<String>,
    ) -> Self {
        ShellListDomain { key: key.into(), depth, add_script: add_script.into(), remove_script: remove_script.into() }
    }
}

impl Domain for ShellListDomain {
    fn key(&self) -> &str {
        &self.key
    }

    fn path_depth(&self) -> usize {
        self.depth
    }

    fn parse(&self, subtree: &YamlValue) -> Result<Vec<DomainConfigEntry>, DomainError> {
        let mut entries = Vec::new();
        for (path, leaf) in scm_core::flatten(subtree, self.depth)? {
            let YamlValue::Sequence(items) = &leaf else {
                return Err(DomainError::ExpectedSequence {
                    domain_key: self.key.clone(),
                    path,
                    found: yaml_type_name(&leaf),
                });
            };
            for item in items {
                if matches!(item, YamlValue::Sequence(_) | YamlValue::Mapping(_)) {
                    return Err(DomainError::NonScalarListItem {
                        domain_key: self.key.clone(),
                        path,
                        found: yaml_type_name(item),
                    });
                }
                entries.push(DomainConfigEntry::List {
                    domain_key: self.key.clone(),
                    path: path.clone(),
                    value: item.to_display_string(),
                });
            }
        }
        Ok(entries)
    }

    fn render(&self, entries: &[DomainConfigEntry]) -> YamlValue {
        let mut grouped: IndexMap<Path, Vec<YamlValue>> = IndexMap::new();
        for entry in entries {
            if let DomainConfigEntry::List { path, value, .. } = entry {
                grouped.entry(path.clone()).or_default().push(YamlValue::String(value.clone()));
            }
        }
        let assignments = grouped.into_iter().map(|(path, items)| (path, YamlValue::Sequence(items)));
        rebuild(assignments).unwrap_or(YamlValue::Null)
    }

    fn diff_action(&self, old: Option<&DomainConfigEntry>, new: Option<&DomainConfigEntry>) -> Action {
        match (old, new) {
            (None, Some(new_entry)) => {
                let vars = Interpolation::for_add(new_entry.path().segments(), entry_value(new_entry));
                Action::Add {
                    new_entry: new_entry.clone(),
                    run: Runnable::Shell(interpolate(&self.add_script, &vars)),
                }
            }
            (Some(old_entry), None) => {
                let vars = Interpolation::for_remove(old_entry.path().segments(), entry_value(old_entry));
                Action::Remove {
                    old_entry: old_entry.clone(),
                    run: Runnable::Shell(interpolate(&self.remove_script, &vars)),
                }
            }
            (Some(old_entry), Some(new_entry)) => {
                Action::NoOp { old_entry: old_entry.clone(), new_entry: new_entry.clone() }
            }
            (None, None) => unreachable!("diff_action is never called with both sides absent"),
        }
    }
}

fn entry_value(entry: &DomainConfigEntry) -> &str {
    match entry {
        DomainConfigEntry::List { value, .. } => value,
        DomainConfigEntry::Map { .. } => unreachable!("list domain never produces map entries"),
    }
}

#[cfg(test)]
#[path = "list_domain_tests.rs"]
mod tests;

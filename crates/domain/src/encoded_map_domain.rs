// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dconf`/`gsettings` (§4.6): map-domains whose add/update/remove is
//! a direct process invocation with an encoded literal, not a
//! shell-template snippet.

use scm_core::{Action, DomainConfigEntry, Path, Runnable, YamlValue};

use crate::domain::{Domain, DomainError};
use crate::encoding::encode_value;
use crate::map_domain::{map_value, parse_map, render_map};

#[derive(Debug, Clone, Copy)]
struct Shape {
    key: &'static str,
    depth: usize,
    binary: &'static str,
    set_verb: &'static str,
}

/// `dconf`/`gsettings`, unified: both invoke `<binary> <set_verb>
/// <path...> <encoded_value>` to add or update, and `<binary> reset
/// <path...>` to remove.
#[derive(Debug, Clone, Copy)]
pub struct EncodedMapDomain(Shape);

impl EncodedMapDomain {
    pub fn dconf() -> Self {
        EncodedMapDomain(Shape { key: "dconf", depth: 1, binary: "dconf", set_verb: "write" })
    }

    pub fn gsettings() -> Self {
        EncodedMapDomain(Shape { key: "gsettings", depth: 2, binary: "gsettings", set_verb: "set" })
    }
}

impl Shape {
    fn set_command(&self, path: &Path, encoded_value: &str) -> Vec<String> {
        let mut argv = vec![self.binary.to_string(), self.set_verb.to_string()];
        argv.extend(path.segments().iter().cloned());
        argv.push(encoded_value.to_string());
        argv
    }

    fn reset_command(&self, path: &Path) -> Vec<String> {
        let mut argv = vec![self.binary.to_string(), "reset".to_string()];
        argv.extend(path.segments().iter().cloned());
        argv
    }
}

impl Domain for EncodedMapDomain {
    fn key(&self) -> &str {
        self.0.key
    }

    fn path_depth(&self) -> usize {
        self.0.depth
    }

    fn parse(&self, subtree: &YamlValue) -> Result<Vec<DomainConfigEntry>, DomainError> {
        parse_map(self.0.key, self.0.depth, subtree)
    }

    fn render(&self, entries: &[DomainConfigEntry]) -> YamlValue {
        render_map(entries)
    }

    fn diff_action(&self, old: Option<&DomainConfigEntry>, new: Option<&DomainConfigEntry>) -> Action {
        match (old, new) {
            (None, Some(new_entry)) => {
                let encoded = encode_value(map_value(new_entry));
                Action::Add {
                    new_entry: new_entry.clone(),
                    run: Runnable::Command(self.0.set_command(new_entry.path(), &encoded)),
                }
            }
            (Some(old_entry), None) => Action::Remove {
                old_entry: old_entry.clone(),
                run: Runnable::Command(self.0.reset_command(old_entry.path())),
            },
            (Some(old_entry), Some(new_entry)) if map_value(old_entry) != map_value(new_entry) => {
                let encoded = encode_value(map_value(new_entry));
                Action::Update {
                    old_entry: old_entry.clone(),
                    new_entry: new_entry.clone(),
                    run: Runnable::Command(self.0.set_command(new_entry.path(), &encoded)),
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
#[path = "encoded_map_domain_tests.rs"]
mod tests;

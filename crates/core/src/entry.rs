// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entries: the flat, identified units of configuration a domain's
//! subtree is parsed into.

use crate::path::Path;
use crate::yaml_value::YamlValue;

/// Uniquely identifies an entry within a [`crate::SystemConfig`].
///
/// For map-entries identity is `(domain_key, path)`; the value is not
/// part of identity, so two entries sharing an id with different
/// values constitute an update. For list-entries identity also
/// includes the `value`, since list membership is itself the thing
/// being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryId {
    Map { domain_key: String, path: Path },
    List { domain_key: String, path: Path, value: String },
}

impl EntryId {
    pub fn domain_key(&self) -> &str {
        match self {
            EntryId::Map { domain_key, .. } | EntryId::List { domain_key, .. } => domain_key,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            EntryId::Map { path, .. } | EntryId::List { path, .. } => path,
        }
    }
}

/// A single unit of configuration produced by flattening a domain's
/// subtree, per §3 of the data model: either a list-membership entry
/// (identity includes the value) or a map entry (identity excludes
/// the value, so differing values are an update).
#[derive(Debug, Clone, PartialEq)]
pub enum DomainConfigEntry {
    /// One item belonging to an ordered list at `path`.
    List { domain_key: String, path: Path, value: String },
    /// The payload stored at `path`, of type `V` (string or arbitrary
    /// [`YamlValue`]) depending on the owning map-domain.
    Map { domain_key: String, path: Path, value: YamlValue },
}

impl DomainConfigEntry {
    pub fn id(&self) -> EntryId {
        match self {
            DomainConfigEntry::List { domain_key, path, value } => EntryId::List {
                domain_key: domain_key.clone(),
                path: path.clone(),
                value: value.clone(),
            },
            DomainConfigEntry::Map { domain_key, path, .. } => {
                EntryId::Map { domain_key: domain_key.clone(), path: path.clone() }
            }
        }
    }

    pub fn domain_key(&self) -> &str {
        match self {
            DomainConfigEntry::List { domain_key, .. } | DomainConfigEntry::Map { domain_key, .. } => {
                domain_key
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DomainConfigEntry::List { path, .. } | DomainConfigEntry::Map { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;

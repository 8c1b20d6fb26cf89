// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! [`SystemConfig`]: the named aggregate a document parses into and a
//! reconciliation run produces.

use indexmap::IndexMap;

use crate::entry::{DomainConfigEntry, EntryId};
use crate::user_domain::UserDomainSpec;

/// The target (or persisted) state of the system: before/after
/// scripts, the flat set of domain entries, and the user-domain
/// declarations those entries reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemConfig {
    pub before_actions: Vec<String>,
    pub after_actions: Vec<String>,
    /// Insertion order is significant: it is both parse order and the
    /// order new entries are applied in.
    pub entries: IndexMap<EntryId, DomainConfigEntry>,
    pub user_domains: IndexMap<String, UserDomainSpec>,
}

impl SystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.keys()
    }
}

#[cfg(test)]
#[path = "system_config_tests.rs"]
mod tests;

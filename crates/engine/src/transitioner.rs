// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config Transitioner (§4.12): composes three Sequence Transitioners
//! (before, entries, after) with the old/new user-domain dictionaries
//! and projects a [`SystemConfig`] at any point during a reconciliation
//! run.

use indexmap::{IndexMap, IndexSet};
use scm_core::{DomainConfigEntry, EntryId, SequenceTransitioner, SystemConfig, TransitionerViolation, UserDomainSpec};
use scm_domain::DomainRegistry;

/// The transitional system state the reconciliation engine commits to
/// one plan step at a time.
pub struct SystemConfigTransitioner {
    before: SequenceTransitioner<String>,
    after: SequenceTransitioner<String>,
    entries: SequenceTransitioner<DomainConfigEntry>,
    old_user_domains: IndexMap<String, UserDomainSpec>,
    new_user_domains: IndexMap<String, UserDomainSpec>,
}

impl SystemConfigTransitioner {
    /// Seeds from `old_config`, carrying the set of user-domain
    /// definitions the *new* document declares (so they can be
    /// promoted into the rendered output as their entries commit).
    pub fn new(old_config: &SystemConfig, new_user_domains: IndexMap<String, UserDomainSpec>) -> Self {
        SystemConfigTransitioner {
            before: SequenceTransitioner::from_old(old_config.before_actions.iter().cloned()),
            after: SequenceTransitioner::from_old(old_config.after_actions.iter().cloned()),
            entries: SequenceTransitioner::from_old(old_config.entries.values().cloned()),
            old_user_domains: old_config.user_domains.clone(),
            new_user_domains,
        }
    }

    pub fn update_before_action(
        &mut self,
        old: Option<String>,
        new: Option<String>,
    ) -> Result<(), TransitionerViolation> {
        self.before.update(old, new)
    }

    pub fn update_after_action(
        &mut self,
        old: Option<String>,
        new: Option<String>,
    ) -> Result<(), TransitionerViolation> {
        self.after.update(old, new)
    }

    pub fn update_config_entry(
        &mut self,
        old: Option<DomainConfigEntry>,
        new: Option<DomainConfigEntry>,
    ) -> Result<(), TransitionerViolation> {
        self.entries.update(old, new)
    }

    /// Projects the current transitional state. `registry` is needed
    /// to know which used domain keys are built-in (and so must never
    /// be carried as a user-domain declaration).
    pub fn current_system_config(&self, registry: &DomainRegistry) -> SystemConfig {
        let entries: IndexMap<EntryId, DomainConfigEntry> =
            self.entries.current().into_iter().map(|entry| (entry.id(), entry)).collect();

        let mut used_domain_keys = IndexSet::new();
        for entry in entries.values() {
            used_domain_keys.insert(entry.domain_key().to_string());
        }

        let mut user_domains = IndexMap::new();
        for key in &used_domain_keys {
            if let Some(spec) = self.new_user_domains.get(key) {
                user_domains.insert(key.clone(), spec.clone());
            } else if !registry.is_builtin(key) {
                if let Some(spec) = self.old_user_domains.get(key) {
                    user_domains.insert(key.clone(), spec.clone());
                }
            }
        }

        SystemConfig {
            before_actions: self.before.current(),
            after_actions: self.after.current(),
            entries,
            user_domains,
        }
    }
}

#[cfg(test)]
#[path = "transitioner_tests.rs"]
mod tests;

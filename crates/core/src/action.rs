// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! [`Action`]: the typed plan step emitted while diffing old and new
//! [`crate::SystemConfig`]s (§4.10, design note "Polymorphism over
//! action kinds").
//!
//! Modeled as a tagged variant rather than a trait-object hierarchy so
//! the reconciliation loop's dispatch is an exhaustive `match` and the
//! commit step can pull `(old?, new?)` straight out of the variant.

use crate::entry::DomainConfigEntry;

/// What a domain-entry action actually runs: a shell-template domain
/// interpolates a snippet, while `dconf`/`gsettings` invoke the tool
/// directly with already-resolved argv (§3: "realized by shell
/// scripts or direct process invocations").
#[derive(Debug, Clone, PartialEq)]
pub enum Runnable {
    Shell(String),
    Command(Vec<String>),
}

impl Runnable {
    pub fn display(&self) -> String {
        match self {
            Runnable::Shell(script) => script.clone(),
            Runnable::Command(argv) => argv.join(" "),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// A before/after freeform script transition: remove the old
    /// script (if any) and run the new one (if any). At most one of
    /// the two is executed in a single step.
    Shell { old_script: Option<String>, new_script: Option<String> },
    Add { new_entry: DomainConfigEntry, run: Runnable },
    Update { old_entry: DomainConfigEntry, new_entry: DomainConfigEntry, run: Runnable },
    Remove { old_entry: DomainConfigEntry, run: Runnable },
    /// Old and new entries exist and are equal; must be committed to
    /// the transitional state but never executed or printed.
    NoOp { old_entry: DomainConfigEntry, new_entry: DomainConfigEntry },
}

impl Action {
    /// What this action would run, if any (`NoOp` and a scriptless
    /// `Shell` step have none).
    pub fn run(&self) -> Option<Runnable> {
        match self {
            Action::Add { run, .. } | Action::Update { run, .. } | Action::Remove { run, .. } => {
                Some(run.clone())
            }
            Action::Shell { new_script: Some(s), .. } => Some(Runnable::Shell(s.clone())),
            Action::Shell { new_script: None, .. } | Action::NoOp { .. } => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Action::NoOp { .. })
    }

    /// Whether committing this action requires running anything at all
    /// (a `Shell` step with neither old nor new script, or a `NoOp`,
    /// commit silently).
    pub fn is_empty_shell(&self) -> bool {
        matches!(self, Action::Shell { old_script: None, new_script: None })
    }

    /// One-line human-facing description, used by the preview executor
    /// and logging.
    pub fn description(&self) -> String {
        match self {
            Action::Shell { new_script: Some(s), .. } => format!("run: {s}"),
            Action::Shell { old_script: Some(s), new_script: None, .. } => format!("remove: {s}"),
            Action::Shell { .. } => String::new(),
            Action::Add { new_entry, .. } => {
                format!("add {} {} = {}", new_entry.domain_key(), new_entry.path(), entry_value(new_entry))
            }
            Action::Update { old_entry, new_entry, .. } => format!(
                "update {} {} = {} -> {}",
                new_entry.domain_key(),
                new_entry.path(),
                entry_value(old_entry),
                entry_value(new_entry)
            ),
            Action::Remove { old_entry, .. } => {
                format!("remove {} {} = {}", old_entry.domain_key(), old_entry.path(), entry_value(old_entry))
            }
            Action::NoOp { .. } => String::new(),
        }
    }

    /// Pulls `(old?, new?)` out of the variant for the transitioner
    /// commit step (§4.10 step 6.3). `Shell` actions are not entries
    /// and are committed through `update_before_action`/`update_after_action`
    /// instead; this is only meaningful for domain-entry actions.
    pub fn entry_pair(&self) -> Option<(Option<&DomainConfigEntry>, Option<&DomainConfigEntry>)> {
        match self {
            Action::Add { new_entry, .. } => Some((None, Some(new_entry))),
            Action::Update { old_entry, new_entry, .. } => Some((Some(old_entry), Some(new_entry))),
            Action::Remove { old_entry, .. } => Some((Some(old_entry), None)),
            Action::NoOp { old_entry, new_entry } => Some((Some(old_entry), Some(new_entry))),
            Action::Shell { .. } => None,
        }
    }
}

fn entry_value(entry: &DomainConfigEntry) -> String {
    match entry {
        DomainConfigEntry::List { value, .. } => value.clone(),
        DomainConfigEntry::Map { value, .. } => value.to_display_string(),
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action plan construction (§4.10, steps 1-6): diffs `old_config`
//! against `new_config` and produces the ordered list of steps the
//! reconciliation loop executes.

use scm_core::{Action, Diff, SystemConfig};
use scm_domain::{DomainError, DomainRegistry};

/// One step of a reconciliation plan. Before/after steps always wrap
/// an [`Action::Shell`]; domain steps wrap whatever the owning
/// [`scm_domain::Domain`] emitted.
#[derive(Debug, Clone)]
pub enum PlanStep {
    Before(Action),
    Domain(Action),
    After(Action),
}

impl PlanStep {
    pub fn action(&self) -> &Action {
        match self {
            PlanStep::Before(action) | PlanStep::Domain(action) | PlanStep::After(action) => action,
        }
    }
}

/// Builds the ordered plan: before-script diff, then removals
/// (reversed add-order) followed by adds/updates in new-document
/// order, then the after-script diff.
pub fn plan(old: &SystemConfig, new: &SystemConfig, registry: &DomainRegistry) -> Result<Vec<PlanStep>, DomainError> {
    let before_diff = Diff::compute(old.before_actions.iter().cloned(), new.before_actions.iter().cloned());
    let after_diff = Diff::compute(old.after_actions.iter().cloned(), new.after_actions.iter().cloned());
    let entry_diff = Diff::compute(old.entries.keys().cloned(), new.entries.keys().cloned());

    let mut steps = Vec::new();

    for (old_script, new_script) in before_diff.pair_stream() {
        steps.push(PlanStep::Before(Action::Shell { old_script, new_script }));
    }

    for id in entry_diff.exclusive_old.iter().rev() {
        let old_entry = old
            .entries
            .get(id)
            .unwrap_or_else(|| unreachable!("exclusive_old id {id:?} is absent from old.entries"));
        let domain = registry.resolve(id.domain_key(), &old.user_domains)?;
        steps.push(PlanStep::Domain(domain.diff_action(Some(old_entry), None)));
    }

    for id in &entry_diff.new {
        let new_entry = new
            .entries
            .get(id)
            .unwrap_or_else(|| unreachable!("new id {id:?} is absent from new.entries"));
        let old_entry = old.entries.get(id);
        let domain = registry.resolve(id.domain_key(), &new.user_domains)?;
        steps.push(PlanStep::Domain(domain.diff_action(old_entry, Some(new_entry))));
    }

    for (old_script, new_script) in after_diff.pair_stream() {
        steps.push(PlanStep::After(Action::Shell { old_script, new_script }));
    }

    Ok(steps)
}

/// Whether `steps` has anything the reconciliation loop would actually
/// run or print (§4.10: "If the plan contains no non-NoOp actions and
/// before/after diffs are empty").
pub fn has_work(steps: &[PlanStep]) -> bool {
    steps.iter().any(|step| match step {
        PlanStep::Before(action) | PlanStep::After(action) => !action.is_empty_shell(),
        PlanStep::Domain(action) => !action.is_noop(),
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;

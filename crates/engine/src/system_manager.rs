// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! [`SystemManager`]: the reconciliation engine (§4.10) that turns a
//! plan into a sequence of executed (or skipped) actions and the
//! transitional [`SystemConfig`] that results.

use std::panic::{self, AssertUnwindSafe};

use scm_core::{Action, Runnable, SystemConfig};
use scm_domain::{DomainError, DomainRegistry};
use scm_shell::{CommandFailure, Executor};

use crate::error_handler::{ErrorHandler, Outcome};
use crate::plan::{has_work, plan, PlanStep};
use crate::transitioner::SystemConfigTransitioner;

/// Outcome of a full [`SystemManager::reconcile`] call: the
/// transitional config plus whether every plan step ran to completion
/// (`false` when a step was aborted, the run was interrupted, or an
/// unexpected error cut it short).
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileReport {
    pub config: SystemConfig,
    pub completed: bool,
}

/// Runs a reconciliation: diffs `old_config` against `new_config`,
/// executes every step through `executor`/`error_handler`, and commits
/// the outcome to a [`SystemConfigTransitioner`].
pub struct SystemManager<'a> {
    executor: &'a dyn Executor,
    error_handler: &'a dyn ErrorHandler,
    registry: &'a DomainRegistry,
}

impl<'a> SystemManager<'a> {
    pub fn new(executor: &'a dyn Executor, error_handler: &'a dyn ErrorHandler, registry: &'a DomainRegistry) -> Self {
        SystemManager { executor, error_handler, registry }
    }

    /// Reconciles `old_config` towards `new_config`. `interrupted` is
    /// polled once between every step; when it reports `true` the loop
    /// stops and the transitional state accumulated so far is
    /// returned (§5, cancellation).
    pub fn reconcile(
        &self,
        old_config: &SystemConfig,
        new_config: &SystemConfig,
        interrupted: &dyn Fn() -> bool,
    ) -> Result<ReconcileReport, DomainError> {
        let steps = plan(old_config, new_config, self.registry)?;

        if !has_work(&steps) {
            println!("# No changes required.");
            return Ok(ReconcileReport { config: new_config.clone(), completed: true });
        }

        let mut transitioner = SystemConfigTransitioner::new(old_config, new_config.user_domains.clone());

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_steps(&steps, &mut transitioner, interrupted)
        }));
        let completed = match outcome {
            Ok(completed) => completed,
            Err(_) => {
                eprintln!("system-config-manager: an unexpected error interrupted the run; persisting partial state");
                false
            }
        };

        Ok(ReconcileReport { config: transitioner.current_system_config(self.registry), completed })
    }

    /// Returns `true` iff every step ran (or committed as a no-op)
    /// without being skipped by an abort or an interruption.
    fn run_steps(
        &self,
        steps: &[PlanStep],
        transitioner: &mut SystemConfigTransitioner,
        interrupted: &dyn Fn() -> bool,
    ) -> bool {
        for step in steps {
            if interrupted() {
                println!("Interrupted; persisting partial state");
                return false;
            }

            let action = step.action();
            if let Some(run) = action.run() {
                match self.error_handler.try_run(&mut || self.execute(&run)) {
                    Outcome::Success => {}
                    Outcome::Skipped => continue,
                    Outcome::Failed => return false,
                }
            }

            self.commit(step, action, transitioner);
        }
        true
    }

    fn execute(&self, run: &Runnable) -> Result<(), CommandFailure> {
        match run {
            Runnable::Shell(script) => self.executor.run_shell(script),
            Runnable::Command(argv) => self.executor.run_command(argv),
        }
    }

    fn commit(&self, step: &PlanStep, action: &Action, transitioner: &mut SystemConfigTransitioner) {
        let result = match step {
            PlanStep::Before(_) => {
                let (old, new) = shell_pair(action);
                transitioner.update_before_action(old, new)
            }
            PlanStep::After(_) => {
                let (old, new) = shell_pair(action);
                transitioner.update_after_action(old, new)
            }
            PlanStep::Domain(_) => {
                let (old, new) = action
                    .entry_pair()
                    .unwrap_or_else(|| unreachable!("a domain plan step always wraps an entry action"));
                transitioner.update_config_entry(old.cloned(), new.cloned())
            }
        };
        if let Err(violation) = result {
            unreachable!("plan construction guarantees a valid commit pair: {violation}");
        }
    }
}

fn shell_pair(action: &Action) -> (Option<String>, Option<String>) {
    match action {
        Action::Shell { old_script, new_script } => (old_script.clone(), new_script.clone()),
        _ => unreachable!("before/after plan steps only ever wrap Action::Shell"),
    }
}

#[cfg(test)]
#[path = "system_manager_tests.rs"]
mod tests;

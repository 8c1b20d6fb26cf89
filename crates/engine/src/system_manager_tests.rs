// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use indexmap::IndexMap;
use scm_core::{DomainConfigEntry, Path};
use scm_domain::DomainRegistry;
use scm_shell::CommandFailure;

use super::*;

struct FixedExecutor {
    fail: bool,
}

impl Executor for FixedExecutor {
    fn run_command(&self, _argv: &[String]) -> Result<(), CommandFailure> {
        self.outcome()
    }

    fn run_shell(&self, _script: &str) -> Result<(), CommandFailure> {
        self.outcome()
    }
}

impl FixedExecutor {
    fn outcome(&self) -> Result<(), CommandFailure> {
        if self.fail {
            Err(CommandFailure::NonZeroExit { cmdline: "x".to_string(), exit_code: 1, stderr_capture: None })
        } else {
            Ok(())
        }
    }
}

fn apt_entry(value: &str) -> DomainConfigEntry {
    DomainConfigEntry::List { domain_key: "apt".to_string(), path: Path::empty(), value: value.to_string() }
}

fn never_interrupted() -> bool {
    false
}

#[test]
fn reconcile_is_a_noop_when_configs_are_identical() {
    let registry = DomainRegistry::with_builtins();
    let config = SystemConfig {
        entries: IndexMap::from([(apt_entry("htop").id(), apt_entry("htop"))]),
        ..SystemConfig::default()
    };
    let executor = FixedExecutor { fail: true };
    let handler = crate::error_handler::AbortErrorHandler;
    let manager = SystemManager::new(&executor, &handler, &registry);

    let report = manager.reconcile(&config, &config, &never_interrupted).expect("valid plan");
    assert_eq!(report.config, config);
    assert!(report.completed);
}

#[test]
fn a_successful_add_commits_into_the_result() {
    let registry = DomainRegistry::with_builtins();
    let old_config = SystemConfig::default();
    let new_config = SystemConfig {
        entries: IndexMap::from([(apt_entry("htop").id(), apt_entry("htop"))]),
        ..SystemConfig::default()
    };
    let executor = FixedExecutor { fail: false };
    let handler = crate::error_handler::AbortErrorHandler;
    let manager = SystemManager::new(&executor, &handler, &registry);

    let report = manager.reconcile(&old_config, &new_config, &never_interrupted).expect("valid plan");
    assert_eq!(report.config.entries.len(), 1);
    assert!(report.config.entries.contains_key(&apt_entry("htop").id()));
    assert!(report.completed);
}

#[test]
fn an_aborted_step_leaves_it_uncommitted() {
    let registry = DomainRegistry::with_builtins();
    let old_config = SystemConfig::default();
    let new_config = SystemConfig {
        entries: IndexMap::from([(apt_entry("htop").id(), apt_entry("htop"))]),
        ..SystemConfig::default()
    };
    let executor = FixedExecutor { fail: true };
    let handler = crate::error_handler::AbortErrorHandler;
    let manager = SystemManager::new(&executor, &handler, &registry);

    let report = manager.reconcile(&old_config, &new_config, &never_interrupted).expect("valid plan");
    assert!(report.config.entries.is_empty());
    assert!(!report.completed);
}

#[test]
fn interruption_before_the_first_step_leaves_the_old_state_intact() {
    let registry = DomainRegistry::with_builtins();
    let old_config = SystemConfig {
        entries: IndexMap::from([(apt_entry("htop").id(), apt_entry("htop"))]),
        ..SystemConfig::default()
    };
    let new_config = SystemConfig {
        entries: IndexMap::from([(apt_entry("vim").id(), apt_entry("vim"))]),
        ..SystemConfig::default()
    };
    let executor = FixedExecutor { fail: false };
    let handler = crate::error_handler::AbortErrorHandler;
    let manager = SystemManager::new(&executor, &handler, &registry);

    let report = manager.reconcile(&old_config, &new_config, &|| true).expect("valid plan");
    assert!(report.config.entries.contains_key(&apt_entry("htop").id()));
    assert!(!report.config.entries.contains_key(&apt_entry("vim").id()));
    assert!(!report.completed);
}

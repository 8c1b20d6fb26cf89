// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::path::Path;
use crate::yaml_value::YamlValue;

fn list_entry(value: &str) -> DomainConfigEntry {
    DomainConfigEntry::List { domain_key: "apt".into(), path: Path::empty(), value: value.into() }
}

#[test]
fn noop_has_no_script() {
    let action = Action::NoOp { old_entry: list_entry("htop"), new_entry: list_entry("htop") };
    assert!(action.is_noop());
    assert_eq!(action.run(), None);
}

#[test]
fn add_exposes_its_script() {
    let action = Action::Add {
        new_entry: list_entry("htop"),
        run: Runnable::Shell("sudo apt install htop".into()),
    };
    assert_eq!(action.run(), Some(Runnable::Shell("sudo apt install htop".into())));
    assert!(!action.is_noop());
}

#[test]
fn add_can_carry_a_direct_command_invocation() {
    let action = Action::Add {
        new_entry: list_entry("htop"),
        run: Runnable::Command(vec!["dconf".into(), "write".into(), "/k".into(), "1".into()]),
    };
    assert_eq!(action.run().expect("add has a run").display(), "dconf write /k 1");
}

#[test]
fn entry_pair_matches_action_kind() {
    let old = list_entry("a");
    let new = list_entry("b");

    assert_eq!(
        Action::Add { new_entry: new.clone(), run: Runnable::Shell(String::new()) }.entry_pair(),
        Some((None, Some(&new)))
    );
    assert_eq!(
        Action::Remove { old_entry: old.clone(), run: Runnable::Shell(String::new()) }.entry_pair(),
        Some((Some(&old), None))
    );
    assert_eq!(Action::Shell { old_script: None, new_script: None }.entry_pair(), None);
}

#[test]
fn empty_shell_step_is_a_pure_commit() {
    let action = Action::Shell { old_script: None, new_script: None };
    assert!(action.is_empty_shell());
    let action = Action::Shell { old_script: Some("echo old".into()), new_script: None };
    assert!(!action.is_empty_shell());
}

#[test]
fn update_description_shows_old_and_new_value() {
    let old = DomainConfigEntry::Map {
        domain_key: "dconf".into(),
        path: Path::from_segments(["greeting"]),
        value: YamlValue::String("a".into()),
    };
    let new = DomainConfigEntry::Map {
        domain_key: "dconf".into(),
        path: Path::from_segments(["greeting"]),
        value: YamlValue::String("b".into()),
    };
    let description = Action::Update {
        old_entry: old,
        new_entry: new,
        run: Runnable::Shell(String::new()),
    }
    .description();
    assert!(description.contains("a -> b"), "{description}");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use scm_core::UserDomainSpec;

#[test]
fn every_spec_builtin_key_is_registered() {
    let registry = DomainRegistry::with_builtins();
    for key in [
        "apt",
        "snap",
        "snap-classic",
        "pip",
        "groups",
        "user-groups",
        "vscode-extensions",
        "git-config-global",
        "symlinks",
        "apt-repository",
        "apt-source-list",
        "apt-keyring",
        "file-lines",
        "dconf",
        "gsettings",
    ] {
        assert!(registry.is_builtin(key), "expected {key} to be a built-in");
    }
}

#[test]
fn builtin_depths_match_the_spec_table() {
    let registry = DomainRegistry::with_builtins();
    let empty = IndexMap::new();
    assert_eq!(registry.resolve("apt", &empty).unwrap().path_depth(), 0);
    assert_eq!(registry.resolve("user-groups", &empty).unwrap().path_depth(), 1);
    assert_eq!(registry.resolve("symlinks", &empty).unwrap().path_depth(), 1);
    assert_eq!(registry.resolve("dconf", &empty).unwrap().path_depth(), 1);
    assert_eq!(registry.resolve("gsettings", &empty).unwrap().path_depth(), 2);
}

#[test]
fn user_domain_resolves_to_a_shell_domain() {
    let registry = DomainRegistry::with_builtins();
    let mut user_domains = IndexMap::new();
    user_domains.insert(
        "custom".to_string(),
        UserDomainSpec {
            kind: UserDomainKind::List,
            depth: 0,
            add: "echo add $value".into(),
            update: None,
            remove: "echo remove $value".into(),
        },
    );
    let domain = registry.resolve("custom", &user_domains).expect("user domain resolves");
    assert_eq!(domain.key(), "custom");
}

#[test]
fn user_domain_shadowing_a_builtin_is_rejected() {
    let registry = DomainRegistry::with_builtins();
    let mut user_domains = IndexMap::new();
    user_domains.insert(
        "apt".to_string(),
        UserDomainSpec {
            kind: UserDomainKind::List,
            depth: 0,
            add: "echo add $value".into(),
            update: None,
            remove: "echo remove $value".into(),
        },
    );
    let err = registry.resolve("apt", &user_domains).unwrap_err();
    assert!(matches!(err, DomainError::ShadowsBuiltin(k) if k == "apt"));
}

#[test]
fn unknown_domain_key_is_an_error() {
    let registry = DomainRegistry::with_builtins();
    let empty = IndexMap::new();
    let err = registry.resolve("does-not-exist", &empty).unwrap_err();
    assert!(matches!(err, DomainError::UnknownDomainKey(k) if k == "does-not-exist"));
}

#[test]
fn user_map_domain_without_update_script_is_a_parse_error() {
    let registry = DomainRegistry::with_builtins();
    let mut user_domains = IndexMap::new();
    user_domains.insert(
        "custom-map".to_string(),
        UserDomainSpec {
            kind: UserDomainKind::Map,
            depth: 1,
            add: "echo add".into(),
            update: None,
            remove: "echo remove".into(),
        },
    );
    let err = registry.resolve("custom-map", &user_domains).unwrap_err();
    assert!(matches!(err, DomainError::MissingScript { field: "update", .. }));
}

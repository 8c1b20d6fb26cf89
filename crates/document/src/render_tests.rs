// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::codec::{SerdeYamlCodec, YamlCodec};
use crate::parse::parse_document;

fn decode(text: &str) -> YamlValue {
    SerdeYamlCodec.decode(text).expect("valid yaml fixture")
}

#[test]
fn parse_then_render_is_the_identity_for_a_simple_document() {
    let registry = DomainRegistry::with_builtins();
    let root = decode(
        "version: '1'\n\
         before:\n\
           - echo start\n\
         config:\n\
           - apt: [htop, git]\n\
           - snap: [discord]\n",
    );
    let config = parse_document(&root, &registry).expect("valid document");
    let rendered = render_document(&config, &registry).expect("renders");
    let reparsed = parse_document(&rendered, &registry).expect("valid re-parse");
    assert_eq!(config, reparsed);
}

#[test]
fn contiguous_entries_of_the_same_domain_render_as_one_task() {
    let registry = DomainRegistry::with_builtins();
    let root = decode("version: '1'\nconfig:\n  - apt: [htop, git]\n");
    let config = parse_document(&root, &registry).expect("valid document");
    let rendered = render_document(&config, &registry).expect("renders");
    let YamlValue::Mapping(top) = &rendered else { panic!("expected mapping") };
    let YamlValue::Sequence(tasks) = top.get("config").expect("config present") else {
        panic!("expected sequence")
    };
    assert_eq!(tasks.len(), 1);
}

#[test]
fn user_domain_not_referenced_by_any_entry_is_suppressed() {
    let registry = DomainRegistry::with_builtins();
    let root = decode(
        "version: '1'\n\
         domains:\n\
           dotfiles:\n\
             type: map\n\
             depth: 1\n\
             add: 'ln -sf $value $key'\n\
             update: 'ln -sf $value $key'\n\
             remove: 'rm -f $key'\n\
         config: []\n",
    );
    let config = parse_document(&root, &registry).expect("valid document");
    assert_eq!(config.user_domains.len(), 1);

    let rendered = render_document(&config, &registry).expect("renders");
    let YamlValue::Mapping(top) = &rendered else { panic!("expected mapping") };
    assert!(top.get("domains").is_none(), "unreferenced user domain should be suppressed");
}

#[test]
fn user_domain_referenced_by_an_entry_is_retained() {
    let registry = DomainRegistry::with_builtins();
    let root = decode(
        "version: '1'\n\
         domains:\n\
           dotfiles:\n\
             type: map\n\
             depth: 1\n\
             add: 'ln -sf $value $key'\n\
             update: 'ln -sf $value $key'\n\
             remove: 'rm -f $key'\n\
         config:\n\
           - dotfiles:\n\
               bashrc: /dotfiles/bashrc\n",
    );
    let config = parse_document(&root, &registry).expect("valid document");
    let rendered = render_document(&config, &registry).expect("renders");
    let YamlValue::Mapping(top) = &rendered else { panic!("expected mapping") };
    let YamlValue::Mapping(domains) = top.get("domains").expect("domains present") else {
        panic!("expected mapping")
    };
    assert!(domains.contains_key("dotfiles"));
}

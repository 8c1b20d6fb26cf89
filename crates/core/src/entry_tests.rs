// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn list_entry_id_includes_value() {
    let a = DomainConfigEntry::List {
        domain_key: "apt".into(),
        path: Path::empty(),
        value: "htop".into(),
    };
    let b = DomainConfigEntry::List {
        domain_key: "apt".into(),
        path: Path::empty(),
        value: "vim".into(),
    };
    assert_ne!(a.id(), b.id());
}

#[test]
fn map_entry_id_excludes_value() {
    let a = DomainConfigEntry::Map {
        domain_key: "gsettings".into(),
        path: Path::from_segments(["org.schema", "key"]),
        value: YamlValue::String("old".into()),
    };
    let b = DomainConfigEntry::Map {
        domain_key: "gsettings".into(),
        path: Path::from_segments(["org.schema", "key"]),
        value: YamlValue::String("new".into()),
    };
    assert_eq!(a.id(), b.id());
    assert_ne!(a, b, "entries with different values are still distinct values");
}

#[test]
fn id_exposes_domain_key_and_path() {
    let id = EntryId::Map { domain_key: "symlinks".into(), path: Path::from_segments(["~/.bashrc"]) };
    assert_eq!(id.domain_key(), "symlinks");
    assert_eq!(id.path(), &Path::from_segments(["~/.bashrc"]));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The [`Domain`] abstraction (§4.5): parse a subtree into entries,
//! render entries back to a subtree, and emit the action that
//! transitions one entry identity from its old to its new state.

use scm_core::{Action, DomainConfigEntry, FlattenError, Path, YamlValue};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    Flatten(#[from] FlattenError),
    #[error("list domain '{domain_key}' expected a sequence at path {path}, found {found}")]
    ExpectedSequence { domain_key: String, path: Path, found: &'static str },
    #[error("list domain '{domain_key}' item at path {path} must be a scalar, found {found}")]
    NonScalarListItem { domain_key: String, path: Path, found: &'static str },
    #[error("unknown domain key '{0}'")]
    UnknownDomainKey(String),
    #[error("domain '{0}' is declared under `domains:` but is also a built-in; user domains may not shadow a built-in")]
    ShadowsBuiltin(String),
    #[error("user domain '{domain_key}' is missing its required '{field}' script")]
    MissingScript { domain_key: String, field: &'static str },
}

pub(crate) fn yaml_type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "bool",
        YamlValue::Integer(_) => "integer",
        YamlValue::Float(_) => "float",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
    }
}

/// A domain turns the sub-document under its key into a flat set of
/// [`DomainConfigEntry`] values, renders the inverse, and knows how to
/// realize a transition between one old and one new entry as an
/// [`Action`].
pub trait Domain {
    fn key(&self) -> &str;
    fn path_depth(&self) -> usize;
    fn parse(&self, subtree: &YamlValue) -> Result<Vec<DomainConfigEntry>, DomainError>;
    fn render(&self, entries: &[DomainConfigEntry]) -> YamlValue;

    /// At least one of `old`/`new` is always `Some` — the engine never
    /// calls this with both absent.
    fn diff_action(&self, old: Option<&DomainConfigEntry>, new: Option<&DomainConfigEntry>) -> Action;
}

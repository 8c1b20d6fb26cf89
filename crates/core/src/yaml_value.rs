// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The recursive value type the whole pipeline is built on.
//!
//! `YamlValue` is a structure-agnostic sum type: the document parser,
//! the nested-map flattener, and the dconf/gsettings encoders all
//! operate on it rather than on any particular YAML library's AST, so
//! the concrete codec (see `scm-document`) can be swapped without
//! touching the reconciliation engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A generic structured value: the recursive sum `null | bool | integer
/// | float | string | sequence | mapping`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YamlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<YamlValue>),
    Mapping(IndexMap<String, YamlValue>),
}

impl YamlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, YamlValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, YamlValue>> {
        match self {
            YamlValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[YamlValue]> {
        match self {
            YamlValue::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way a shell-template substitution would:
    /// scalars render as their literal text, everything else falls
    /// back to a JSON rendering since it has no sensible shell form.
    pub fn to_display_string(&self) -> String {
        match self {
            YamlValue::Null => String::new(),
            YamlValue::Bool(b) => b.to_string(),
            YamlValue::Integer(i) => i.to_string(),
            YamlValue::Float(f) => f.to_string(),
            YamlValue::String(s) => s.clone(),
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }
}

impl PartialEq for YamlValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (YamlValue::Null, YamlValue::Null) => true,
            (YamlValue::Bool(a), YamlValue::Bool(b)) => a == b,
            (YamlValue::Integer(a), YamlValue::Integer(b)) => a == b,
            (YamlValue::Float(a), YamlValue::Float(b)) => a == b,
            (YamlValue::String(a), YamlValue::String(b)) => a == b,
            (YamlValue::Sequence(a), YamlValue::Sequence(b)) => a == b,
            (YamlValue::Mapping(a), YamlValue::Mapping(b)) => a == b,
            // Integer/Float are distinct variants so that round-tripping
            // through a YAML codec preserves the author's spelling, but
            // `1` and `1.0` should still compare unequal rather than
            // silently coercing.
            _ => false,
        }
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::String(s.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::String(s)
    }
}

impl From<bool> for YamlValue {
    fn from(b: bool) -> Self {
        YamlValue::Bool(b)
    }
}

#[cfg(test)]
#[path = "yaml_value_tests.rs"]
mod tests;

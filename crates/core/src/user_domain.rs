// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The declarative shape of a user-defined domain, as it appears under
//! `domains:` in the document (§4.7). `scm-domain` turns this into a
//! runtime [`crate::Action`]-emitting `Domain`.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserDomainKind {
    List,
    Map,
}

/// `{ type: list|map, depth: integer, add: string, [update: string for
/// map,] remove: string }`. Equal by all fields. `depth` defaults to
/// [`UserDomainSpec::default_depth`] for the declared `kind` when
/// omitted, which a derived `Deserialize` cannot express (the default
/// of one field depends on the value of another), hence the manual
/// impl below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDomainSpec {
    #[serde(rename = "type")]
    pub kind: UserDomainKind,
    pub depth: usize,
    pub add: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    pub remove: String,
}

impl UserDomainSpec {
    pub fn default_depth(kind: UserDomainKind) -> usize {
        match kind {
            UserDomainKind::List => 0,
            UserDomainKind::Map => 1,
        }
    }
}

#[derive(Deserialize)]
struct RawUserDomainSpec {
    #[serde(rename = "type")]
    kind: UserDomainKind,
    depth: Option<usize>,
    add: String,
    #[serde(default)]
    update: Option<String>,
    remove: String,
}

impl<'de> Deserialize<'de> for UserDomainSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawUserDomainSpec::deserialize(deserializer)?;
        let depth = raw.depth.unwrap_or_else(|| UserDomainSpec::default_depth(raw.kind));
        Ok(UserDomainSpec { kind: raw.kind, depth, add: raw.add, update: raw.update, remove: raw.remove })
    }
}

#[cfg(test)]
#[path = "user_domain_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document parser (§4.8): turns a decoded `YamlValue` document into a
//! [`SystemConfig`], resolving domain keys through a [`DomainRegistry`].

use indexmap::IndexMap;
use scm_core::{Path, SystemConfig, UserDomainSpec, YamlValue};
use scm_domain::{DomainError, DomainRegistry};
use thiserror::Error;

/// The only document version this implementation recognizes; the
/// parser table is statically keyed on it (§4.8).
pub const DOCUMENT_VERSION: &str = "1";

const TOP_LEVEL_KEYS: &[&str] = &["version", "domains", "before", "after", "config"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is missing the required 'version' field")]
    MissingVersion,
    #[error("unsupported document version {0:?}; expected \"{DOCUMENT_VERSION}\"")]
    UnsupportedVersion(String),
    #[error("top-level document must be a mapping")]
    NotAMapping,
    #[error("unknown top-level key '{0}'")]
    UnknownKey(String),
    #[error("'domains' must be a mapping of domain key to domain spec")]
    InvalidDomainsShape,
    #[error("domain spec for '{0}' is invalid: {1}")]
    InvalidUserDomainSpec(String, String),
    #[error("duplicate domain declaration for key '{0}'")]
    DuplicateUserDomain(String),
    #[error("'{0}' must be a sequence of strings")]
    InvalidScriptListShape(&'static str),
    #[error("duplicate script in '{list}': {script}")]
    DuplicateScript { list: &'static str, script: String },
    #[error("'config' must be a sequence of mappings")]
    InvalidConfigShape,
    #[error("task entry must be a mapping")]
    InvalidTaskShape,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("duplicate entry for domain '{domain_key}' at path {path}")]
    DuplicateEntryId { domain_key: String, path: Path },
}

fn decode_as<T: serde::de::DeserializeOwned>(value: &YamlValue) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::to_value(value).unwrap_or(serde_json::Value::Null))
}

/// Parse a decoded document into a [`SystemConfig`], resolving domain
/// keys (built-in or user-declared) through `registry`.
pub fn parse_document(root: &YamlValue, registry: &DomainRegistry) -> Result<SystemConfig, ParseError> {
    let YamlValue::Mapping(top) = root else { return Err(ParseError::NotAMapping) };

    let version = top.get("version").ok_or(ParseError::MissingVersion)?;
    let version_str = match version {
        YamlValue::String(s) => s.clone(),
        other => other.to_display_string(),
    };
    if version_str != DOCUMENT_VERSION {
        return Err(ParseError::UnsupportedVersion(version_str));
    }

    for key in top.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            return Err(ParseError::UnknownKey(key.clone()));
        }
    }

    let user_domains = parse_user_domains(top.get("domains"))?;
    let before_actions = parse_script_list(top.get("before"), "before")?;
    let after_actions = parse_script_list(top.get("after"), "after")?;
    reject_duplicate_scripts(&before_actions, "before")?;
    reject_duplicate_scripts(&after_actions, "after")?;

    let mut entries = IndexMap::new();
    if let Some(config) = top.get("config") {
        let YamlValue::Sequence(tasks) = config else { return Err(ParseError::InvalidConfigShape) };
        for task in tasks {
            let YamlValue::Mapping(task_fields) = task else { return Err(ParseError::InvalidTaskShape) };
            for (domain_key, subtree) in task_fields {
                let domain = registry.resolve(domain_key, &user_domains)?;
                for entry in domain.parse(subtree)? {
                    let id = entry.id();
                    let path = id.path().clone();
                    if entries.insert(id, entry).is_some() {
                        return Err(ParseError::DuplicateEntryId { domain_key: domain_key.clone(), path });
                    }
                }
            }
        }
    }

    Ok(SystemConfig { before_actions, after_actions, entries, user_domains })
}

fn parse_user_domains(node: Option<&YamlValue>) -> Result<IndexMap<String, UserDomainSpec>, ParseError> {
    let Some(node) = node else { return Ok(IndexMap::new()) };
    let YamlValue::Mapping(map) = node else { return Err(ParseError::InvalidDomainsShape) };

    let mut result = IndexMap::new();
    for (key, spec_value) in map {
        let spec: UserDomainSpec =
            decode_as(spec_value).map_err(|e| ParseError::InvalidUserDomainSpec(key.clone(), e.to_string()))?;
        if result.insert(key.clone(), spec).is_some() {
            return Err(ParseError::DuplicateUserDomain(key.clone()));
        }
    }
    Ok(result)
}

fn parse_script_list(node: Option<&YamlValue>, list_name: &'static str) -> Result<Vec<String>, ParseError> {
    let Some(node) = node else { return Ok(Vec::new()) };
    let YamlValue::Sequence(items) = node else { return Err(ParseError::InvalidScriptListShape(list_name)) };
    items
        .iter()
        .map(|item| match item {
            YamlValue::String(s) => Ok(s.clone()),
            _ => Err(ParseError::InvalidScriptListShape(list_name)),
        })
        .collect()
}

fn reject_duplicate_scripts(scripts: &[String], list_name: &'static str) -> Result<(), ParseError> {
    let mut seen = std::collections::HashSet::new();
    for script in scripts {
        if !seen.insert(script.as_str()) {
            return Err(ParseError::DuplicateScript { list: list_name, script: script.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

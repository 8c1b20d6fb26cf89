// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document renderer (§4.8): the inverse of [`crate::parse_document`].
//! Groups contiguous same-domain entries into one task each and
//! suppresses any user-domain declaration not referenced by a
//! surviving entry.

use indexmap::{IndexMap, IndexSet};
use scm_core::{DomainConfigEntry, SystemConfig, UserDomainSpec, YamlValue};
use scm_domain::{DomainError, DomainRegistry};

use crate::parse::DOCUMENT_VERSION;

fn encode_as<T: serde::Serialize>(value: &T) -> YamlValue {
    let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    serde_json::from_value(json).unwrap_or(YamlValue::Null)
}

fn group_contiguous_by_domain(config: &SystemConfig) -> Vec<(String, Vec<DomainConfigEntry>)> {
    let mut groups: Vec<(String, Vec<DomainConfigEntry>)> = Vec::new();
    for entry in config.entries.values() {
        let key = entry.domain_key().to_string();
        match groups.last_mut() {
            Some((last_key, items)) if *last_key == key => items.push(entry.clone()),
            _ => groups.push((key, vec![entry.clone()])),
        }
    }
    groups
}

/// Render `config` back into a decoded document value.
pub fn render_document(config: &SystemConfig, registry: &DomainRegistry) -> Result<YamlValue, DomainError> {
    let groups = group_contiguous_by_domain(config);

    let mut tasks = Vec::with_capacity(groups.len());
    let mut used_domain_keys: IndexSet<String> = IndexSet::new();
    for (domain_key, entries) in &groups {
        let domain = registry.resolve(domain_key, &config.user_domains)?;
        let subtree = domain.render(entries);
        let mut task = IndexMap::new();
        task.insert(domain_key.clone(), subtree);
        tasks.push(YamlValue::Mapping(task));
        used_domain_keys.insert(domain_key.clone());
    }

    let mut top = IndexMap::new();
    top.insert("version".to_string(), YamlValue::String(DOCUMENT_VERSION.to_string()));

    if !config.before_actions.is_empty() {
        top.insert(
            "before".to_string(),
            YamlValue::Sequence(config.before_actions.iter().cloned().map(YamlValue::String).collect()),
        );
    }
    if !config.after_actions.is_empty() {
        top.insert(
            "after".to_string(),
            YamlValue::Sequence(config.after_actions.iter().cloned().map(YamlValue::String).collect()),
        );
    }

    top.insert("config".to_string(), YamlValue::Sequence(tasks));

    let domains_out: IndexMap<String, YamlValue> = config
        .user_domains
        .iter()
        .filter(|(key, _)| used_domain_keys.contains(key.as_str()))
        .map(|(key, spec)| (key.clone(), encode_user_domain_spec(spec)))
        .collect();
    if !domains_out.is_empty() {
        top.insert("domains".to_string(), YamlValue::Mapping(domains_out));
    }

    Ok(YamlValue::Mapping(top))
}

fn encode_user_domain_spec(spec: &UserDomainSpec) -> YamlValue {
    encode_as(spec)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

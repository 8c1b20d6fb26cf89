// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script Template (§4.4): pure, left-to-right textual interpolation
//! of `$key`/`$keyN`/`$value`/`$old_value`/`$new_value` in
//! user-authored shell snippets.
//!
//! Resolution never sees the executor: this module is a pure function
//! of `(template, path, value(s))`, which keeps variable resolution
//! unit-testable in isolation and keeps interpolation bugs from
//! reaching a shell.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the longest possible variable name at each position
/// (`$key10` before `$key1` before `$key`, `$old_value`/`$new_value`
/// before `$value`) so replacement order can never be ambiguous.
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$key\d+\b|\$key\b|\$old_value\b|\$new_value\b|\$value\b")
        .expect("constant regex pattern is valid")
});

/// The variable bindings available for one action's interpolation.
///
/// `path` supplies `$key`/`$keyN`; `value`/`old_value`/`new_value`
/// supply the corresponding scalar variables. Which of `value`,
/// `old_value`, `new_value` are populated depends on the action kind
/// the template is being interpolated for — see the `for_*`
/// constructors.
#[derive(Debug, Clone, Default)]
pub struct Interpolation<'a> {
    pub path: &'a [String],
    pub value: Option<&'a str>,
    pub old_value: Option<&'a str>,
    pub new_value: Option<&'a str>,
}

impl<'a> Interpolation<'a> {
    /// Bindings for an Add action: `$key`/`$keyN`, `$value` and
    /// `$new_value` both bound to the new value.
    pub fn for_add(path: &'a [String], new_value: &'a str) -> Self {
        Interpolation { path, value: Some(new_value), old_value: None, new_value: Some(new_value) }
    }

    /// Bindings for an Update action: the above plus `$old_value`.
    pub fn for_update(path: &'a [String], old_value: &'a str, new_value: &'a str) -> Self {
        Interpolation {
            path,
            value: Some(new_value),
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// Bindings for a Remove action: `$key`/`$keyN`, `$value` and
    /// `$old_value` both bound to the old value.
    pub fn for_remove(path: &'a [String], old_value: &'a str) -> Self {
        Interpolation { path, value: Some(old_value), old_value: Some(old_value), new_value: None }
    }

    fn variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        for (i, segment) in self.path.iter().enumerate() {
            vars.insert(format!("$key{}", i + 1), segment.clone());
        }
        if let Some(first) = self.path.first() {
            vars.insert("$key".to_string(), first.clone());
        }
        if let Some(value) = self.value {
            vars.insert("$value".to_string(), value.to_string());
        }
        if let Some(old_value) = self.old_value {
            vars.insert("$old_value".to_string(), old_value.to_string());
        }
        if let Some(new_value) = self.new_value {
            vars.insert("$new_value".to_string(), new_value.to_string());
        }
        vars
    }
}

/// Interpolate `template` against `vars` in a single left-to-right
/// pass. Unknown/undefined variables (e.g. `$key` with an empty path)
/// are left as-is. Replacement output is never re-scanned.
pub fn interpolate(template: &str, vars: &Interpolation) -> String {
    let bindings = vars.variables();
    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| match bindings.get(&caps[0]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

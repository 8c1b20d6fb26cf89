// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dconf/gsettings literal grammar (§4.6): `null -> <@mb nothing>`,
//! booleans and numbers literal, strings double-quoted, sequences
//! bracketed, mappings braced `"k": v` pairs.

use scm_core::YamlValue;

pub fn encode_value(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "<@mb nothing>".to_string(),
        YamlValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        YamlValue::Integer(n) => n.to_string(),
        YamlValue::Float(f) => f.to_string(),
        YamlValue::String(s) => format!("\"{s}\""),
        YamlValue::Sequence(items) => {
            format!("[{}]", items.iter().map(encode_value).collect::<Vec<_>>().join(", "))
        }
        YamlValue::Mapping(map) => {
            let pairs =
                map.iter().map(|(k, v)| format!("\"{k}\": {}", encode_value(v))).collect::<Vec<_>>().join(", ");
            format!("{{ {pairs} }}")
        }
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;

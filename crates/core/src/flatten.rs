// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nested-Map Flattener & Structure Builder (§4.3): converts between
//! structured trees and `(Path, leaf)` mappings bounded by a declared
//! path depth.

use thiserror::Error;

use crate::path::Path;
use crate::yaml_value::YamlValue;

#[derive(Debug, Error, PartialEq)]
pub enum FlattenError {
    #[error("expected a mapping at path {path} (depth {depth_remaining} levels remain), found a scalar or sequence")]
    ExpectedMapping { path: Path, depth_remaining: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("cannot assign a value at path {path}: a scalar already occupies this position")]
    TypeConflict { path: Path },
    #[error("list index {index} at path {path} skips ahead of the current length {len}")]
    IndexSkipsAhead { path: Path, index: usize, len: usize },
}

/// Flatten `tree` to depth `depth`, yielding one `(Path, leaf)` pair
/// per path of length `depth`. At each of the `depth` levels the
/// current level must be a mapping (`null` is dropped, not an error).
pub fn flatten(tree: &YamlValue, depth: usize) -> Result<Vec<(Path, YamlValue)>, FlattenError> {
    let mut out = Vec::new();
    flatten_into(tree, depth, Vec::new(), &mut out)?;
    Ok(out)
}

fn flatten_into(
    value: &YamlValue,
    depth_remaining: usize,
    current_path: Vec<String>,
    out: &mut Vec<(Path, YamlValue)>,
) -> Result<(), FlattenError> {
    if depth_remaining == 0 {
        out.push((Path(current_path), value.clone()));
        return Ok(());
    }

    match value {
        YamlValue::Null => Ok(()),
        YamlValue::Mapping(map) => {
            for (key, child) in map {
                let mut next_path = current_path.clone();
                next_path.push(key.clone());
                flatten_into(child, depth_remaining - 1, next_path, out)?;
            }
            Ok(())
        }
        _ => Err(FlattenError::ExpectedMapping { path: Path(current_path), depth_remaining }),
    }
}

/// The inverse of [`flatten`]: materialize a nested structure from a
/// sequence of `(Path, leaf)` assignments, auto-creating intermediate
/// maps, and treating a path segment as a list index when it parses
/// as a non-negative integer (appending when the index equals the
/// current list length; an index that skips ahead is an error).
pub fn rebuild(assignments: impl IntoIterator<Item = (Path, YamlValue)>) -> Result<YamlValue, BuildError> {
    let mut root = YamlValue::Null;
    for (path, leaf) in assignments {
        assign(&mut root, path.segments(), leaf, &path)?;
    }
    Ok(root)
}

fn assign(
    container: &mut YamlValue,
    remaining: &[String],
    leaf: YamlValue,
    full_path: &Path,
) -> Result<(), BuildError> {
    let Some((key, rest)) = remaining.split_first() else {
        *container = leaf;
        return Ok(());
    };

    if let Ok(index) = key.parse::<usize>() {
        if matches!(container, YamlValue::Null) {
            *container = YamlValue::Sequence(Vec::new());
        }
        let YamlValue::Sequence(seq) = container else {
            return Err(BuildError::TypeConflict { path: full_path.clone() });
        };
        match index.cmp(&seq.len()) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => seq.push(YamlValue::Null),
            std::cmp::Ordering::Greater => {
                return Err(BuildError::IndexSkipsAhead { path: full_path.clone(), index, len: seq.len() })
            }
        }
        assign(&mut seq[index], rest, leaf, full_path)
    } else {
        if matches!(container, YamlValue::Null) {
            *container = YamlValue::Mapping(indexmap::IndexMap::new());
        }
        let YamlValue::Mapping(map) = container else {
            return Err(BuildError::TypeConflict { path: full_path.clone() });
        };
        let child = map.entry(key.clone()).or_insert(YamlValue::Null);
        assign(child, rest, leaf, full_path)
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! [`Path`]: the ordered key sequence identifying an entry within its
//! domain's subtree.

use serde::{Deserialize, Serialize};

/// A finite ordered sequence of string segments, length equal to the
/// owning domain's declared `path_depth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(pub Vec<String>);

impl Path {
    pub fn empty() -> Self {
        Path(Vec::new())
    }

    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Path(segments.into_iter().map(Into::into).collect())
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn joined(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined("."))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;

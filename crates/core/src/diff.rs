// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered Diff (§4.1): compares two ordered sequences without
//! internal duplicates, preserving order.

/// The difference between two ordered collections, preserving order.
///
/// - `intersection` keeps the order of `new`.
/// - `union` is `exclusive_old ++ new` (items unique to `old` first,
///   then all of `new` in its own order).
///
/// Membership is a linear value-equality scan rather than a hash
/// lookup, mirroring the reference implementation this algorithm was
/// distilled from: `SystemConfig`s are small enough in practice that
/// an O(n*m) scan is not a concern, and it lets `T` be anything
/// `PartialEq + Clone` without also demanding `Hash`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diff<T> {
    pub old: Vec<T>,
    pub new: Vec<T>,
    pub exclusive_old: Vec<T>,
    pub exclusive_new: Vec<T>,
    pub intersection: Vec<T>,
    pub union: Vec<T>,
}

impl<T: Clone + PartialEq> Diff<T> {
    pub fn compute(old: impl IntoIterator<Item = T>, new: impl IntoIterator<Item = T>) -> Self {
        let old: Vec<T> = old.into_iter().collect();
        let new: Vec<T> = new.into_iter().collect();

        let exclusive_old: Vec<T> = old.iter().filter(|item| !new.contains(item)).cloned().collect();
        let exclusive_new: Vec<T> = new.iter().filter(|item| !old.contains(item)).cloned().collect();
        let intersection: Vec<T> = new.iter().filter(|item| old.contains(item)).cloned().collect();
        let union: Vec<T> = exclusive_old.iter().cloned().chain(new.iter().cloned()).collect();

        Diff { old, new, exclusive_old, exclusive_new, intersection, union }
    }

    /// For each item in `exclusive_old` emit `(Some(old), None)`; for
    /// each item in `new` (in `new`'s order) emit `(old?, Some(new))`
    /// where `old?` is `Some(item)` iff the item is in the
    /// intersection.
    pub fn pair_stream(&self) -> Vec<(Option<T>, Option<T>)> {
        let mut pairs = Vec::with_capacity(self.exclusive_old.len() + self.new.len());
        for item in &self.exclusive_old {
            pairs.push((Some(item.clone()), None));
        }
        for item in &self.new {
            let old_side = if self.intersection.contains(item) { Some(item.clone()) } else { None };
            pairs.push((old_side, Some(item.clone())));
        }
        pairs
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;

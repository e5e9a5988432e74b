//! Bulk selection
//!
//! A set of code points, independent of any materialized character list.
//! Grid cells test membership by their own code point; export iterates it.

use std::collections::BTreeSet;

/// Selected code points (ascending iteration order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    code_points: BTreeSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns whether the code point is now selected
    pub fn toggle(&mut self, code_point: u32) -> bool {
        if self.code_points.remove(&code_point) {
            false
        } else {
            self.code_points.insert(code_point);
            true
        }
    }

    /// Add without toggling (returns false if already present)
    pub fn insert(&mut self, code_point: u32) -> bool {
        self.code_points.insert(code_point)
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.code_points.contains(&code_point)
    }

    pub fn clear(&mut self) {
        self.code_points.clear();
    }

    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.code_points.iter().copied()
    }
}

impl FromIterator<u32> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            code_points: iter.into_iter().collect(),
        }
    }
}

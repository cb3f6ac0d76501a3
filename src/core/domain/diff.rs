//! Diff type.
//!
//! Represents the keys exclusive to each side of a comparison between two
//! variable groups.

use std::collections::HashSet;

use crate::core::domain::{env_label, EnvMap};

/// Which side of the comparison a key exists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A key present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    key: String,
    value: String,
    side: Side,
}

impl DiffEntry {
    /// Create a new diff entry.
    pub fn new(key: String, value: String, side: Side) -> Self {
        Self { key, value, side }
    }

    /// The variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display value on the side that has the key.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// One-sided key differences between two groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDiff {
    left_label: String,
    right_label: String,
    only_left: Vec<DiffEntry>,
    only_right: Vec<DiffEntry>,
}

impl GroupDiff {
    /// Compute the diff between two named env maps.
    ///
    /// Labels are the trailing `.` segment of each group name. Both exclusive
    /// lists are sorted by key; shared keys appear in neither, whatever their
    /// values.
    pub fn compute(left_name: &str, left: &EnvMap, right_name: &str, right: &EnvMap) -> Self {
        Self {
            left_label: env_label(left_name).to_string(),
            right_label: env_label(right_name).to_string(),
            only_left: exclusive(left, right, Side::Left),
            only_right: exclusive(right, left, Side::Right),
        }
    }

    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    pub fn right_label(&self) -> &str {
        &self.right_label
    }

    /// Keys only in the left group, sorted.
    pub fn only_left(&self) -> &[DiffEntry] {
        &self.only_left
    }

    /// Keys only in the right group, sorted.
    pub fn only_right(&self) -> &[DiffEntry] {
        &self.only_right
    }

    /// Whether both groups have the same key set.
    pub fn is_empty(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

fn exclusive(this: &EnvMap, other: &EnvMap, side: Side) -> Vec<DiffEntry> {
    let other_keys: HashSet<&str> = other.keys().collect();

    let mut entries: Vec<DiffEntry> = this
        .entries()
        .iter()
        .filter(|(k, _)| !other_keys.contains(k.as_str()))
        .map(|(k, v)| DiffEntry::new(k.clone(), v.clone(), side))
        .collect();

    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

//! Row Expansion State
//!
//! Which rows show their description. Keyed by record name, so a flag
//! follows its row through reordering and is forgotten once the row is
//! removed.

use std::collections::HashSet;

use crate::record::Keyed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    expanded: HashSet<String>,
}

impl ExpandedRows {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip the flag for `key`, returning the new state
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// Forget flags of rows no longer displayed
    pub fn retain_present<T: Keyed>(&mut self, rows: &[T]) {
        let present: HashSet<&str> = rows.iter().map(Keyed::key).collect();
        self.expanded.retain(|key| present.contains(key.as_str()));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

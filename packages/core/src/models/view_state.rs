//! Expand/collapse state for the memo tree view.
//!
//! A pure value owned by the view layer and passed into rendering. The tree
//! building and move logic never reads or writes this; keeping it out of the
//! core means every tree operation stays a pure function over the flat list.

use std::collections::HashSet;

use super::MemoRecord;

/// Set of memo ids whose children are currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedNodes {
    expanded: HashSet<i64>,
}

impl ExpandedNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expand(&mut self, id: i64) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: i64) {
        self.expanded.remove(&id);
    }

    /// Toggle one node; returns the new expanded state.
    pub fn toggle(&mut self, id: i64) -> bool {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
            true
        } else {
            false
        }
    }

    /// Expand every ancestor of `id` so the node becomes visible.
    ///
    /// Walks the parent chain with the same hop bound the ancestry checker
    /// uses, so corrupt stored data cannot hang the view.
    pub fn expand_path(&mut self, records: &[MemoRecord], id: i64) {
        let mut current = id;
        for _ in 0..records.len() {
            let Some(parent) = records
                .iter()
                .find(|r| r.id == current)
                .and_then(|r| r.parent_id)
            else {
                return;
            };
            self.expanded.insert(parent);
            current = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, parent_id: Option<i64>) -> MemoRecord {
        MemoRecord {
            id,
            parent_id,
            sort_order: id,
            ..MemoRecord::new(format!("memo {}", id))
        }
    }

    #[test]
    fn test_toggle() {
        let mut state = ExpandedNodes::new();
        assert!(state.toggle(1));
        assert!(state.is_expanded(1));
        assert!(!state.toggle(1));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_expand_path_expands_all_ancestors() {
        let records = vec![record(1, None), record(2, Some(1)), record(3, Some(2))];
        let mut state = ExpandedNodes::new();
        state.expand_path(&records, 3);
        assert!(state.is_expanded(1));
        assert!(state.is_expanded(2));
        // The target itself is not expanded, only made reachable
        assert!(!state.is_expanded(3));
    }

    #[test]
    fn test_expand_path_terminates_on_cyclic_data() {
        let records = vec![record(1, Some(2)), record(2, Some(1))];
        let mut state = ExpandedNodes::new();
        state.expand_path(&records, 1);
        assert!(state.is_expanded(2));
    }
}

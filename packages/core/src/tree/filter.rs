//! Visibility filtering: free-text search, tag filter, soft-delete toggle.
//!
//! Filtering produces a visible-id set rather than a filtered list: every
//! matching memo pulls its whole ancestor chain into the set so a deeply
//! nested hit stays reachable in the rendered tree. Non-matching ancestors
//! are navigational scaffolding only; they contribute no further recursion.

use std::collections::{HashMap, HashSet};

use crate::models::MemoRecord;
use crate::tree::{build_forest, MemoTreeNode};

/// The list pane's filter state.
///
/// Free text and the tag filter compose as AND; within the tag filter every
/// required tag must be present on the record (AND semantics). Deleted memos
/// are excluded unless `show_deleted` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoQuery {
    pub search: String,
    pub tag_filter: Vec<i64>,
    pub show_deleted: bool,
}

impl MemoQuery {
    /// Whether the record itself matches the query.
    pub fn matches(&self, record: &MemoRecord) -> bool {
        if record.deleted && !self.show_deleted {
            return false;
        }
        if !self.search.is_empty() {
            let title_hit = record.title.contains(&self.search);
            let content_hit = record
                .content
                .as_deref()
                .is_some_and(|content| content.contains(&self.search));
            if !title_hit && !content_hit {
                return false;
            }
        }
        self.tag_filter.iter().all(|tag| record.has_tag(*tag))
    }
}

/// Ids visible under `query`: all matching ids plus every ancestor needed to
/// keep a match reachable from its root.
///
/// The upward walk stops at a missing parent or at an id already in the set,
/// so it terminates even on malformed parent data.
pub fn visible_ids(records: &[MemoRecord], query: &MemoQuery) -> HashSet<i64> {
    let parent_of: HashMap<i64, Option<i64>> =
        records.iter().map(|r| (r.id, r.parent_id)).collect();

    let mut visible: HashSet<i64> = records
        .iter()
        .filter(|r| query.matches(r))
        .map(|r| r.id)
        .collect();

    let matched: Vec<i64> = visible.iter().copied().collect();
    for id in matched {
        let mut current = id;
        while let Some(parent) = parent_of.get(&current).copied().flatten() {
            if !visible.insert(parent) {
                // Chain above this ancestor is already included
                break;
            }
            current = parent;
        }
    }
    visible
}

/// The rendered forest under `query`: built from the records restricted to
/// [`visible_ids`].
pub fn visible_forest(records: &[MemoRecord], query: &MemoQuery) -> Vec<MemoTreeNode> {
    let ids = visible_ids(records, query);
    let restricted: Vec<MemoRecord> = records
        .iter()
        .filter(|r| ids.contains(&r.id))
        .cloned()
        .collect();
    build_forest(&restricted)
}

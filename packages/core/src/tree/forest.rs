//! Forest construction from the flat memo list.
//!
//! The backend stores memos flat; the nested forest is derived here on every
//! change and never persisted. Construction is total over any input: orphaned
//! parent references promote the record to a root, and cyclic `parent_id`
//! chains cannot hang the builder because each record is consumed at most
//! once during attachment.

use std::collections::{HashMap, HashSet};

use crate::models::MemoRecord;

/// A memo record with its materialized, order-sorted children.
///
/// Derived from the flat list; rebuilt whenever the flat list changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoTreeNode {
    pub record: MemoRecord,
    pub children: Vec<MemoTreeNode>,
}

impl MemoTreeNode {
    /// Number of records in this subtree, including the node itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MemoTreeNode::count).sum::<usize>()
    }

    /// Ids of every record in this subtree, pre-order.
    pub fn subtree_ids(&self) -> Vec<i64> {
        let mut ids = vec![self.record.id];
        for child in &self.children {
            ids.extend(child.subtree_ids());
        }
        ids
    }
}

/// Build the forest for a flat list of records.
///
/// A record is a root when `parent_id` is `None` or refers to an id not
/// present in the list (orphan promotion). Children at every level are sorted
/// by ascending `sort_order`, as are the roots.
///
/// Total over any input: each record is removed from the working map exactly
/// once when attached, so malformed data (cycles, self-parents) degrades to
/// records being left out of the result rather than an infinite loop.
pub fn build_forest(records: &[MemoRecord]) -> Vec<MemoTreeNode> {
    // Last record wins on duplicate ids, like a map insert would
    let mut by_id: HashMap<i64, MemoRecord> =
        records.iter().map(|r| (r.id, r.clone())).collect();
    let ids: HashSet<i64> = by_id.keys().copied().collect();

    // Group child ids under their effective parent; self-parents and unknown
    // parents promote to root
    let mut child_ids: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut root_ids: Vec<i64> = Vec::new();
    for record in by_id.values() {
        match record.parent_id {
            Some(parent) if parent != record.id && ids.contains(&parent) => {
                child_ids.entry(parent).or_default().push(record.id);
            }
            _ => root_ids.push(record.id),
        }
    }

    let sort_key = |id: &i64| by_id.get(id).map(|r| r.sort_order).unwrap_or(0);
    root_ids.sort_by_key(sort_key);
    for group in child_ids.values_mut() {
        group.sort_by_key(sort_key);
    }

    let mut forest = Vec::with_capacity(root_ids.len());
    for id in root_ids {
        if let Some(node) = attach(id, &mut by_id, &child_ids) {
            forest.push(node);
        }
    }
    forest
}

/// Consume the record for `id` and recursively attach its children.
///
/// `remove` guarantees each record is built at most once, which is what makes
/// the builder safe against cyclic parent data.
fn attach(
    id: i64,
    by_id: &mut HashMap<i64, MemoRecord>,
    child_ids: &HashMap<i64, Vec<i64>>,
) -> Option<MemoTreeNode> {
    let record = by_id.remove(&id)?;
    let children = child_ids
        .get(&id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child| attach(*child, by_id, child_ids))
                .collect()
        })
        .unwrap_or_default();
    Some(MemoTreeNode { record, children })
}

/// Flatten a forest back to the flat list via pre-order traversal: parent
/// before children, children in their sorted order.
///
/// This walk defines the global `sort_order` sequence the mover assigns.
pub fn flatten_preorder(forest: Vec<MemoTreeNode>) -> Vec<MemoRecord> {
    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}

fn walk(nodes: Vec<MemoTreeNode>, out: &mut Vec<MemoRecord>) {
    for node in nodes {
        out.push(node.record);
        walk(node.children, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, parent_id: Option<i64>, sort_order: i64) -> MemoRecord {
        MemoRecord {
            id,
            parent_id,
            sort_order,
            ..MemoRecord::new(format!("memo {}", id))
        }
    }

    #[test]
    fn test_build_forest_nests_and_sorts() {
        let records = vec![
            record(3, Some(1), 3),
            record(1, None, 1),
            record(2, None, 4),
            record(4, Some(1), 2),
        ];

        let forest = build_forest(&records);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].record.id, 1);
        assert_eq!(forest[1].record.id, 2);
        let children: Vec<i64> = forest[0].children.iter().map(|c| c.record.id).collect();
        assert_eq!(children, vec![4, 3], "children sorted by sort_order");
    }

    #[test]
    fn test_orphan_promoted_to_root() {
        let records = vec![record(1, None, 1), record(2, Some(99), 2)];

        let forest = build_forest(&records);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[1].record.id, 2);
        assert!(forest[1].children.is_empty());
    }

    #[test]
    fn test_self_parent_promoted_to_root() {
        let records = vec![record(1, Some(1), 1)];

        let forest = build_forest(&records);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].record.id, 1);
    }

    #[test]
    fn test_cyclic_parent_data_does_not_hang() {
        // 1 <-> 2 reference each other; builder must terminate
        let records = vec![record(1, Some(2), 1), record(2, Some(1), 2), record(3, None, 3)];

        let forest = build_forest(&records);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].record.id, 3);
    }

    #[test]
    fn test_flatten_preorder_parent_before_children() {
        let records = vec![
            record(1, None, 1),
            record(2, Some(1), 2),
            record(3, Some(2), 3),
            record(4, None, 4),
        ];

        let flat = flatten_preorder(build_forest(&records));
        let ids: Vec<i64> = flat.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_subtree_ids() {
        let records = vec![
            record(1, None, 1),
            record(2, Some(1), 2),
            record(3, Some(2), 3),
        ];
        let forest = build_forest(&records);
        assert_eq!(forest[0].subtree_ids(), vec![1, 2, 3]);
        assert_eq!(forest[0].count(), 3);
    }
}

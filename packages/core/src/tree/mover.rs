//! Subtree move: the central mutation of the memo tree.
//!
//! A drop detaches the dragged memo together with its entire subtree,
//! re-attaches it under the target parent (appended, or immediately before a
//! given sibling), and renumbers `sort_order` as a single global `1..=N`
//! sequence over the pre-order flattening of the whole forest.
//!
//! Invalid placements are not errors: drag-and-drop UX convention is that an
//! impossible drop simply does nothing, so they come back as
//! [`MoveOutcome::Rejected`] carrying the input unchanged. Only corrupt
//! stored data (a pre-existing cycle) surfaces as [`TreeError`].

use crate::models::MemoRecord;
use crate::tree::{build_forest, flatten_preorder, is_ancestor_or_self, MemoTreeNode, TreeError};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedMove {
    /// The dragged id does not exist in the list.
    UnknownDragged,
    /// The target parent id does not exist in the list.
    UnknownParent,
    /// A memo cannot become its own parent.
    SelfParent,
    /// The target parent sits inside the dragged memo's subtree.
    IntoOwnSubtree,
    /// The insertion sibling sits inside the dragged memo's subtree, which
    /// travels with the move.
    BeforeOwnDescendant,
}

/// Result of [`move_node`].
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The full record list, renumbered `1..=N` in pre-order.
    Moved(Vec<MemoRecord>),
    /// The input, unchanged; nothing should be persisted.
    Rejected {
        records: Vec<MemoRecord>,
        reason: RejectedMove,
    },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// The resulting record list, whether or not the move was applied.
    pub fn into_records(self) -> Vec<MemoRecord> {
        match self {
            MoveOutcome::Moved(records) => records,
            MoveOutcome::Rejected { records, .. } => records,
        }
    }
}

/// Move `dragged_id` (with its whole subtree) under `new_parent_id`, placed
/// immediately before `before_sibling_id` when given and present in the
/// destination, otherwise appended as the last child. `new_parent_id` of
/// `None` targets the root level of the scope.
///
/// Does not mutate the input. On success every record's `sort_order` is
/// renumbered; only the dragged record's `parent_id` changes, nothing else.
pub fn move_node(
    records: &[MemoRecord],
    dragged_id: i64,
    new_parent_id: Option<i64>,
    before_sibling_id: Option<i64>,
) -> Result<MoveOutcome, TreeError> {
    let reject = |reason: RejectedMove| {
        tracing::debug!(dragged_id, ?reason, "memo move rejected");
        Ok(MoveOutcome::Rejected {
            records: records.to_vec(),
            reason,
        })
    };

    if !records.iter().any(|r| r.id == dragged_id) {
        return reject(RejectedMove::UnknownDragged);
    }
    if new_parent_id == Some(dragged_id) {
        return reject(RejectedMove::SelfParent);
    }
    if let Some(parent_id) = new_parent_id {
        if !records.iter().any(|r| r.id == parent_id) {
            return reject(RejectedMove::UnknownParent);
        }
        // Dropping into the dragged memo's own subtree would create a cycle
        if is_ancestor_or_self(records, dragged_id, parent_id)? {
            return reject(RejectedMove::IntoOwnSubtree);
        }
    }
    if let Some(sibling_id) = before_sibling_id {
        // Covers sibling == dragged as well (self case of the check)
        if is_ancestor_or_self(records, dragged_id, sibling_id)? {
            return reject(RejectedMove::BeforeOwnDescendant);
        }
    }

    let mut forest = build_forest(records);
    let Some(mut dragged) = detach(&mut forest, dragged_id) else {
        // Present in the list but unreachable in the forest: corrupt data
        tracing::error!(dragged_id, "dragged memo missing from built forest");
        return Err(TreeError::corrupt_hierarchy(dragged_id));
    };
    dragged.record.parent_id = new_parent_id;

    match new_parent_id {
        None => insert_before(&mut forest, dragged, before_sibling_id),
        Some(parent_id) => {
            let Some(parent) = find_mut(&mut forest, parent_id) else {
                tracing::error!(parent_id, "target parent missing from built forest");
                return Err(TreeError::corrupt_hierarchy(parent_id));
            };
            insert_before(&mut parent.children, dragged, before_sibling_id);
        }
    }

    // Global renumbering: sort_order encodes the full depth-first walk
    let mut flat = flatten_preorder(forest);
    for (index, record) in flat.iter_mut().enumerate() {
        record.sort_order = index as i64 + 1;
    }
    tracing::debug!(
        dragged_id,
        ?new_parent_id,
        ?before_sibling_id,
        renumbered = flat.len(),
        "memo move applied"
    );
    Ok(MoveOutcome::Moved(flat))
}

/// Remove the node with `id` from wherever it sits in the forest.
fn detach(nodes: &mut Vec<MemoTreeNode>, id: i64) -> Option<MemoTreeNode> {
    if let Some(position) = nodes.iter().position(|n| n.record.id == id) {
        return Some(nodes.remove(position));
    }
    for node in nodes.iter_mut() {
        if let Some(found) = detach(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut(nodes: &mut [MemoTreeNode], id: i64) -> Option<&mut MemoTreeNode> {
    for node in nodes.iter_mut() {
        if node.record.id == id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Insert into the destination sibling sequence: immediately before
/// `before_sibling_id` when present, otherwise appended at the end.
fn insert_before(siblings: &mut Vec<MemoTreeNode>, node: MemoTreeNode, before_sibling_id: Option<i64>) {
    let position = before_sibling_id
        .and_then(|id| siblings.iter().position(|n| n.record.id == id))
        .unwrap_or(siblings.len());
    siblings.insert(position, node);
}

#[cfg(test)]
#[path = "mover_test.rs"]
mod mover_test;

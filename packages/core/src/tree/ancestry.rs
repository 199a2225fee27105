//! Ancestry checks over the flat memo list.
//!
//! The mover uses this to reject drops that would create a cycle ("drop a
//! memo into its own descendant") before touching the forest at all.

use std::collections::HashMap;

use crate::models::MemoRecord;
use crate::tree::TreeError;

/// Whether `candidate_ancestor_id` is `node_id` itself or one of its
/// ancestors, walking `node_id`'s parent chain upward.
///
/// A parent id missing from `records` ends the walk (the record is a root by
/// orphan promotion). The walk is bounded by `records.len()` hops; exceeding
/// the bound means the stored data already contains a cycle, which is
/// reported as [`TreeError::CorruptHierarchy`] rather than an ordinary
/// `Ok(false)` because it requires out-of-band repair.
pub fn is_ancestor_or_self(
    records: &[MemoRecord],
    candidate_ancestor_id: i64,
    node_id: i64,
) -> Result<bool, TreeError> {
    let parent_of: HashMap<i64, Option<i64>> =
        records.iter().map(|r| (r.id, r.parent_id)).collect();

    let mut current = node_id;
    let mut hops = 0usize;
    loop {
        if current == candidate_ancestor_id {
            return Ok(true);
        }
        let Some(parent) = parent_of.get(&current).copied().flatten() else {
            return Ok(false);
        };
        hops += 1;
        if hops > records.len() {
            tracing::error!(
                node_id,
                "parent chain walk exceeded record count; stored hierarchy contains a cycle"
            );
            return Err(TreeError::corrupt_hierarchy(node_id));
        }
        current = parent;
    }
}

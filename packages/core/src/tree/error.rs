//! Tree Error Types
//!
//! Structural rejections (self-parenting, cycle-creating moves) are not
//! errors: the mover reports them as [`crate::tree::MoveOutcome::Rejected`]
//! and the caller simply does not move anything. An error here means the
//! stored data itself is broken and needs out-of-band repair.

use thiserror::Error;

/// Data-inconsistency signals from the tree core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A parent-chain walk exceeded the record count, which can only happen
    /// when the stored list already contains a cycle.
    #[error("corrupt memo hierarchy: parent chain starting at memo {node_id} never reaches a root")]
    CorruptHierarchy { node_id: i64 },
}

impl TreeError {
    /// Create a corrupt hierarchy error
    pub fn corrupt_hierarchy(node_id: i64) -> Self {
        Self::CorruptHierarchy { node_id }
    }
}

//! Memo Tree Core
//!
//! Pure, synchronous logic over the flat memo list of a single scope:
//!
//! - [`build_forest`] - derive the nested forest from flat records
//! - [`is_ancestor_or_self`] - parent-chain walk used for cycle prevention
//! - [`move_node`] - detach a subtree, re-attach it, renumber sort order
//! - [`visible_ids`] / [`visible_forest`] - search/tag filtering with
//!   ancestor scaffolding
//!
//! All functions take immutable input and produce new values; nothing here
//! touches the backend or any view state. Invariants maintained by every
//! successful move:
//!
//! 1. The parent-chain graph stays acyclic
//! 2. Every record appears in the rebuilt forest exactly once
//! 3. Sibling order matches the relative order of `sort_order` values
//! 4. Only the moved record's `parent_id` and everyone's `sort_order` change

mod ancestry;
mod error;
mod filter;
mod forest;
mod mover;

pub use ancestry::is_ancestor_or_self;
pub use error::TreeError;
pub use filter::{visible_forest, visible_ids, MemoQuery};
pub use forest::{build_forest, flatten_preorder, MemoTreeNode};
pub use mover::{move_node, MoveOutcome, RejectedMove};

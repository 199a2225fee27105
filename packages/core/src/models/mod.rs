//! Data Models
//!
//! This module contains the data structures shared across the crate:
//!
//! - `MemoRecord` - Flat memo record matching the backend JSON contract
//! - `MemoUpdate` - Partial content-level update (never touches hierarchy)
//! - `MemoTag` - Externally managed tag entity referenced by `tag_ids`
//! - `MemoScope` - Grouping boundary a memo forest is built within
//! - `ExpandedNodes` - View-owned expand/collapse state
//!
//! The forest node type derived from `MemoRecord` lives in [`crate::tree`],
//! next to the logic that builds it.

mod memo;
mod scope;
mod tag;
mod view_state;

pub use memo::{MemoRecord, MemoUpdate, UNSAVED_ID};
pub use scope::MemoScope;
pub use tag::MemoTag;
pub use view_state::ExpandedNodes;

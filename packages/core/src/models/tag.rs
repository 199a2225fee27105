//! Memo tag entity.

use serde::{Deserialize, Serialize};

/// Externally managed tag referenced by `MemoRecord::tag_ids`.
///
/// Tags are created and edited through their own backend endpoints; the memo
/// core only reads them to resolve filter options and labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoTag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

//! Memo Record Structures
//!
//! The flat memo record as stored and transmitted by the external backend.
//! Hierarchy and ordering are encoded in `parent_id` and `sort_order`; the
//! nested forest is derived from the flat list and never persisted.
//!
//! # Examples
//!
//! ```rust
//! use mediboard_core::models::{MemoRecord, UNSAVED_ID};
//!
//! let memo = MemoRecord::new("初回カウンセリング");
//! assert_eq!(memo.id, UNSAVED_ID);
//! assert!(!memo.is_persisted());
//! ```

use serde::{Deserialize, Serialize};

/// Client-side placeholder id for a memo that has not been persisted yet.
///
/// The backend assigns the real id on create; until then the record carries
/// this reserved value and must not be referenced as a parent by any other
/// record.
pub const UNSAVED_ID: i64 = 0;

/// Flat memo record matching the backend JSON contract:
///
/// ```json
/// { "id": 1, "parent_id": null, "title": "...", "content": null,
///   "tag_ids": [3, 7], "deleted": false, "sort_order": 1 }
/// ```
///
/// # Fields
///
/// - `id`: backend-assigned identity; [`UNSAVED_ID`] until persisted
/// - `parent_id`: `None` means root-level within the owning scope
/// - `title`, `content`: memo text; `content` may be absent or empty
/// - `tag_ids`: references to externally managed tags (set semantics,
///   order not significant)
/// - `deleted`: soft-delete flag; deleted memos stay addressable for restore
/// - `sort_order`: position in the global pre-order walk of the scope's
///   forest, renumbered to `1..=N` after every move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoRecord {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub deleted: bool,
    pub sort_order: i64,
}

impl MemoRecord {
    /// Create a fresh, unsaved root-level memo.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            parent_id: None,
            title: title.into(),
            content: None,
            tag_ids: Vec::new(),
            deleted: false,
            sort_order: 0,
        }
    }

    /// Whether the backend has assigned this memo a real id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Whether the memo carries the given tag.
    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}

/// Partial content-level update for a memo.
///
/// Carries only `title`/`content`/`tag_ids`; hierarchy changes (`parent_id`,
/// `sort_order`) go through the tree mover and the batch reorder call, never
/// through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

impl MemoUpdate {
    /// Update with a new title only.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag_ids.is_none()
    }

    /// Apply the update to a record in place.
    pub fn apply(&self, record: &mut MemoRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(content) = &self.content {
            record.content = Some(content.clone());
        }
        if let Some(tag_ids) = &self.tag_ids {
            record.tag_ids = tag_ids.clone();
        }
    }
}

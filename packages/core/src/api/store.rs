//! MemoStore Trait - Backend Abstraction Layer
//!
//! Abstracts the external backend so the service layer and its tests never
//! depend on HTTP. The real implementation is [`crate::api::HttpMemoStore`];
//! integration tests use an in-memory store.
//!
//! All methods are async; implementations must be `Send + Sync` so the store
//! can be shared behind an `Arc` across async tasks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::{MemoRecord, MemoScope, MemoTag, MemoUpdate};

/// One element of the batch reorder payload: everything the backend needs to
/// persist a memo's position after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderEntry {
    pub id: i64,
    pub sort_order: i64,
    pub parent_id: Option<i64>,
}

impl ReorderEntry {
    /// Build the batch for a full renumbered record list.
    pub fn from_records(records: &[MemoRecord]) -> Vec<ReorderEntry> {
        records
            .iter()
            .map(|r| ReorderEntry {
                id: r.id,
                sort_order: r.sort_order,
                parent_id: r.parent_id,
            })
            .collect()
    }
}

/// Backend operations the memo core depends on.
#[async_trait]
pub trait MemoStore: Send + Sync {
    /// Fetch the flat memo list for a scope.
    ///
    /// With `include_deleted` the backend returns soft-deleted records too,
    /// which the client needs for the "show deleted" toggle and restore.
    async fn fetch_memos(
        &self,
        scope: MemoScope,
        include_deleted: bool,
    ) -> Result<Vec<MemoRecord>, ApiError>;

    /// Create a memo; the returned record carries the backend-assigned id.
    async fn create_memo(
        &self,
        scope: MemoScope,
        record: &MemoRecord,
    ) -> Result<MemoRecord, ApiError>;

    /// Apply a content-level update; returns the updated record.
    async fn update_memo(&self, id: i64, update: &MemoUpdate) -> Result<MemoRecord, ApiError>;

    /// Toggle the soft-delete flag (delete or restore).
    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<(), ApiError>;

    /// Persist a move as one batch of position triples.
    async fn reorder(&self, scope: MemoScope, entries: &[ReorderEntry]) -> Result<(), ApiError>;

    /// Fetch the tag master used for filter options and labels.
    async fn fetch_tags(&self) -> Result<Vec<MemoTag>, ApiError>;
}

//! Memo Service
//!
//! Owns a scope's flat record list and orchestrates the pure tree core
//! against the backend store. Everything here is single-task, event-driven
//! state: one service instance per open scope, driven by UI callbacks.
//!
//! # Optimistic moves
//!
//! A successful move replaces local state immediately and then issues one
//! batch reorder call. A failed call does NOT roll local state back; the
//! error is surfaced so the caller can decide to [`MemoService::refresh`].
//! A second drag started before the first call resolves operates on whatever
//! local state is current — an accepted weakness of this design, not a
//! guarantee.

use std::sync::Arc;

use crate::api::{MemoStore, ReorderEntry};
use crate::models::{MemoRecord, MemoScope, MemoTag, MemoUpdate, UNSAVED_ID};
use crate::services::MemoServiceError;
use crate::tree::{build_forest, move_node, visible_forest, MemoQuery, MemoTreeNode, MoveOutcome, RejectedMove};

/// Caller-facing result of a move: the records themselves live in the
/// service, so only the status travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// Applied locally and persisted.
    Moved,
    /// Silent no-op; nothing changed, nothing was sent.
    Rejected(RejectedMove),
}

/// Per-scope memo state and operations.
pub struct MemoService {
    scope: MemoScope,
    store: Arc<dyn MemoStore>,
    records: Vec<MemoRecord>,
}

impl MemoService {
    /// Create a service for one scope; call [`MemoService::load`] before use.
    pub fn new(store: Arc<dyn MemoStore>, scope: MemoScope) -> Self {
        Self {
            scope,
            store,
            records: Vec::new(),
        }
    }

    pub fn scope(&self) -> MemoScope {
        self.scope
    }

    /// The authoritative local flat list, deleted records included.
    pub fn records(&self) -> &[MemoRecord] {
        &self.records
    }

    /// Fetch the scope's flat list and replace local state.
    pub async fn load(&mut self) -> Result<(), MemoServiceError> {
        self.records = self.store.fetch_memos(self.scope, true).await?;
        tracing::debug!(scope = %self.scope, count = self.records.len(), "loaded memo records");
        Ok(())
    }

    /// Re-fetch authoritative state, e.g. after a failed reorder call.
    pub async fn refresh(&mut self) -> Result<(), MemoServiceError> {
        self.load().await
    }

    /// The full forest for rendering, no filter applied.
    pub fn forest(&self) -> Vec<MemoTreeNode> {
        build_forest(&self.records)
    }

    /// The filtered forest: matches plus ancestor scaffolding.
    pub fn visible_forest(&self, query: &MemoQuery) -> Vec<MemoTreeNode> {
        visible_forest(&self.records, query)
    }

    /// Tag master for filter options.
    pub async fn tags(&self) -> Result<Vec<MemoTag>, MemoServiceError> {
        Ok(self.store.fetch_tags().await?)
    }

    /// Create a memo under `parent_id` (or at root level), appended at the
    /// end of the scope's global order. Returns the backend-assigned id.
    pub async fn create(
        &mut self,
        title: impl Into<String>,
        content: Option<String>,
        tag_ids: Vec<i64>,
        parent_id: Option<i64>,
    ) -> Result<i64, MemoServiceError> {
        if let Some(parent) = parent_id {
            if !self.contains(parent) {
                return Err(MemoServiceError::memo_not_found(parent));
            }
        }
        let next_order = self.records.iter().map(|r| r.sort_order).max().unwrap_or(0) + 1;
        let record = MemoRecord {
            id: UNSAVED_ID,
            parent_id,
            title: title.into(),
            content,
            tag_ids,
            deleted: false,
            sort_order: next_order,
        };

        let persisted = self.store.create_memo(self.scope, &record).await?;
        tracing::debug!(id = persisted.id, scope = %self.scope, "memo created");
        let id = persisted.id;
        self.records.push(persisted);
        Ok(id)
    }

    /// Content-level edit (title/content/tags). Hierarchy is untouchable
    /// here; moves go through [`MemoService::move_memo`].
    pub async fn edit(&mut self, id: i64, update: MemoUpdate) -> Result<(), MemoServiceError> {
        if update.is_empty() {
            return Err(MemoServiceError::invalid_update("update carries no changes"));
        }
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MemoServiceError::memo_not_found(id))?;

        let updated = self.store.update_memo(id, &update).await?;
        self.records[index] = updated;
        Ok(())
    }

    /// Soft-delete: the memo stays addressable for restore and history.
    pub async fn soft_delete(&mut self, id: i64) -> Result<(), MemoServiceError> {
        self.set_deleted(id, true).await
    }

    pub async fn restore(&mut self, id: i64) -> Result<(), MemoServiceError> {
        self.set_deleted(id, false).await
    }

    async fn set_deleted(&mut self, id: i64, deleted: bool) -> Result<(), MemoServiceError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MemoServiceError::memo_not_found(id))?;

        self.store.set_deleted(id, deleted).await?;
        self.records[index].deleted = deleted;
        Ok(())
    }

    /// Drag-and-drop entry point: run the pure mover, apply the result
    /// optimistically, persist one batch reorder call.
    ///
    /// On a persistence failure the optimistic local state is kept and
    /// [`MemoServiceError::PersistenceFailed`] is returned; the caller may
    /// [`MemoService::refresh`] to recover authoritative state.
    pub async fn move_memo(
        &mut self,
        dragged_id: i64,
        new_parent_id: Option<i64>,
        before_sibling_id: Option<i64>,
    ) -> Result<MoveStatus, MemoServiceError> {
        match move_node(&self.records, dragged_id, new_parent_id, before_sibling_id)? {
            MoveOutcome::Rejected { reason, .. } => Ok(MoveStatus::Rejected(reason)),
            MoveOutcome::Moved(updated) => {
                self.records = updated;
                let batch = ReorderEntry::from_records(&self.records);
                if let Err(e) = self.store.reorder(self.scope, &batch).await {
                    tracing::warn!(
                        scope = %self.scope,
                        error = %e,
                        "batch reorder failed; keeping optimistic local state"
                    );
                    return Err(MemoServiceError::PersistenceFailed(e));
                }
                Ok(MoveStatus::Moved)
            }
        }
    }

    fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }
}

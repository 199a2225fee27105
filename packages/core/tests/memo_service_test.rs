//! Integration tests for MemoService against an in-memory store.
//!
//! Covers the service-level behavior the pure tree tests cannot: optimistic
//! state on persistence failure, the single batch reorder call, and id
//! assignment on create.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mediboard_core::api::{ApiError, MemoStore, ReorderEntry};
use mediboard_core::models::{MemoRecord, MemoScope, MemoTag, MemoUpdate};
use mediboard_core::services::{MemoService, MemoServiceError, MoveStatus};
use mediboard_core::tree::{MemoQuery, RejectedMove};

/// In-memory backend double with failure injection for the reorder call.
struct MockStore {
    memos: Mutex<Vec<MemoRecord>>,
    tags: Vec<MemoTag>,
    next_id: AtomicI64,
    fail_reorder: AtomicBool,
    reorder_calls: AtomicUsize,
    last_batch: Mutex<Vec<ReorderEntry>>,
}

impl MockStore {
    fn new(memos: Vec<MemoRecord>) -> Self {
        let next_id = memos.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            memos: Mutex::new(memos),
            tags: vec![
                MemoTag {
                    id: 1,
                    name: "初診".to_string(),
                    color: Some("#0ea5e9".to_string()),
                },
                MemoTag {
                    id: 2,
                    name: "検診".to_string(),
                    color: None,
                },
            ],
            next_id: AtomicI64::new(next_id),
            fail_reorder: AtomicBool::new(false),
            reorder_calls: AtomicUsize::new(0),
            last_batch: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MemoStore for MockStore {
    async fn fetch_memos(
        &self,
        _scope: MemoScope,
        include_deleted: bool,
    ) -> Result<Vec<MemoRecord>, ApiError> {
        let memos = self.memos.lock().unwrap();
        Ok(memos
            .iter()
            .filter(|m| include_deleted || !m.deleted)
            .cloned()
            .collect())
    }

    async fn create_memo(
        &self,
        _scope: MemoScope,
        record: &MemoRecord,
    ) -> Result<MemoRecord, ApiError> {
        let mut persisted = record.clone();
        persisted.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.memos.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn update_memo(&self, id: i64, update: &MemoUpdate) -> Result<MemoRecord, ApiError> {
        let mut memos = self.memos.lock().unwrap();
        let memo = memos
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ApiError::unexpected_status(format!("/memos/{}", id), 404, "not found"))?;
        update.apply(memo);
        Ok(memo.clone())
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<(), ApiError> {
        let mut memos = self.memos.lock().unwrap();
        let memo = memos
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ApiError::unexpected_status(format!("/memos/{}", id), 404, "not found"))?;
        memo.deleted = deleted;
        Ok(())
    }

    async fn reorder(&self, _scope: MemoScope, entries: &[ReorderEntry]) -> Result<(), ApiError> {
        self.reorder_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reorder.load(Ordering::SeqCst) {
            return Err(ApiError::unexpected_status("/memos/reorder", 500, "boom"));
        }
        *self.last_batch.lock().unwrap() = entries.to_vec();

        let mut memos = self.memos.lock().unwrap();
        for entry in entries {
            if let Some(memo) = memos.iter_mut().find(|m| m.id == entry.id) {
                memo.parent_id = entry.parent_id;
                memo.sort_order = entry.sort_order;
            }
        }
        Ok(())
    }

    async fn fetch_tags(&self) -> Result<Vec<MemoTag>, ApiError> {
        Ok(self.tags.clone())
    }
}

fn record(id: i64, parent_id: Option<i64>, sort_order: i64, title: &str) -> MemoRecord {
    MemoRecord {
        id,
        parent_id,
        sort_order,
        ..MemoRecord::new(title)
    }
}

/// Roots 1 and 2, with 3 a child of 1.
fn seeded() -> Vec<MemoRecord> {
    vec![
        record(1, None, 1, "経過観察"),
        record(2, None, 2, "定期検診メモ"),
        record(3, Some(1), 3, "初回カウンセリング"),
    ]
}

async fn loaded_service() -> (MemoService, Arc<MockStore>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let store = Arc::new(MockStore::new(seeded()));
    let mut service = MemoService::new(store.clone(), MemoScope::Facility(42));
    service.load().await.unwrap();
    (service, store)
}

#[tokio::test]
async fn test_load_builds_expected_forest() {
    let (service, _store) = loaded_service().await;

    let forest = service.forest();
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].record.id, 1);
    assert_eq!(forest[0].children[0].record.id, 3);
    assert_eq!(forest[1].record.id, 2);
}

#[tokio::test]
async fn test_create_replaces_unsaved_id_with_backend_id() -> anyhow::Result<()> {
    let (mut service, _store) = loaded_service().await;

    let id = service
        .create("新しいメモ", Some("内容".to_string()), vec![1], Some(1))
        .await?;

    assert_eq!(id, 4, "backend-assigned id");
    let created = service.records().iter().find(|r| r.id == id).unwrap();
    assert!(created.is_persisted());
    assert_eq!(created.parent_id, Some(1));
    assert_eq!(created.sort_order, 4, "appended at the end of the global order");
    Ok(())
}

#[tokio::test]
async fn test_create_under_unknown_parent_fails() {
    let (mut service, _store) = loaded_service().await;

    let result = service.create("orphan", None, vec![], Some(99)).await;
    assert!(matches!(
        result,
        Err(MemoServiceError::MemoNotFound { id: 99 })
    ));
}

#[tokio::test]
async fn test_move_sends_one_batch_and_updates_local_state() {
    let (mut service, store) = loaded_service().await;

    let status = service.move_memo(2, Some(1), None).await.unwrap();

    assert_eq!(status, MoveStatus::Moved);
    assert_eq!(store.reorder_calls.load(Ordering::SeqCst), 1);

    let batch = store.last_batch.lock().unwrap().clone();
    assert_eq!(batch.len(), 3, "every record travels in the batch");
    let moved = batch.iter().find(|e| e.id == 2).unwrap();
    assert_eq!(moved.parent_id, Some(1));

    let forest = service.forest();
    assert_eq!(forest.len(), 1);
    let children: Vec<i64> = forest[0].children.iter().map(|c| c.record.id).collect();
    assert_eq!(children, vec![3, 2]);
}

#[tokio::test]
async fn test_rejected_move_sends_nothing() {
    let (mut service, store) = loaded_service().await;
    let before = service.records().to_vec();

    // Dropping root 1 onto its own child 3 would create a cycle
    let status = service.move_memo(1, Some(3), None).await.unwrap();

    assert_eq!(status, MoveStatus::Rejected(RejectedMove::IntoOwnSubtree));
    assert_eq!(store.reorder_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.records(), before.as_slice(), "local state untouched");
}

#[tokio::test]
async fn test_failed_reorder_keeps_optimistic_state() {
    let (mut service, store) = loaded_service().await;
    store.fail_reorder.store(true, Ordering::SeqCst);

    let result = service.move_memo(2, Some(1), None).await;

    assert!(matches!(
        result,
        Err(MemoServiceError::PersistenceFailed(_))
    ));
    // Optimistic local state reflects the move despite the failure
    let forest = service.forest();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].children.len(), 2);

    // Manual refresh recovers the authoritative (unmoved) state
    store.fail_reorder.store(false, Ordering::SeqCst);
    service.refresh().await.unwrap();
    assert_eq!(service.forest().len(), 2);
}

#[tokio::test]
async fn test_soft_delete_and_restore_round_trip() {
    let (mut service, _store) = loaded_service().await;

    service.soft_delete(2).await.unwrap();
    let deleted = service.records().iter().find(|r| r.id == 2).unwrap();
    assert!(deleted.deleted);

    // Hidden from the default view, visible with the toggle
    assert!(service
        .visible_forest(&MemoQuery::default())
        .iter()
        .all(|n| n.record.id != 2));
    let with_deleted = MemoQuery {
        show_deleted: true,
        ..MemoQuery::default()
    };
    assert!(service
        .visible_forest(&with_deleted)
        .iter()
        .any(|n| n.record.id == 2));

    service.restore(2).await.unwrap();
    assert!(!service.records().iter().find(|r| r.id == 2).unwrap().deleted);
}

#[tokio::test]
async fn test_edit_applies_update_locally_and_remotely() -> anyhow::Result<()> {
    let (mut service, store) = loaded_service().await;

    service.edit(3, MemoUpdate::title("再診メモ")).await?;

    let local = service.records().iter().find(|r| r.id == 3).unwrap();
    assert_eq!(local.title, "再診メモ");
    let remote = store.memos.lock().unwrap();
    assert_eq!(remote.iter().find(|r| r.id == 3).unwrap().title, "再診メモ");
    Ok(())
}

#[tokio::test]
async fn test_edit_with_empty_update_is_invalid() {
    let (mut service, _store) = loaded_service().await;

    let result = service.edit(3, MemoUpdate::default()).await;
    assert!(matches!(result, Err(MemoServiceError::InvalidUpdate(_))));
}

#[tokio::test]
async fn test_search_filters_through_service() {
    let (service, _store) = loaded_service().await;

    let query = MemoQuery {
        search: "カウンセ".to_string(),
        ..MemoQuery::default()
    };
    let forest = service.visible_forest(&query);

    // Child 3 matches; root 1 is scaffolding; root 2 is gone
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].record.id, 1);
    assert_eq!(forest[0].children[0].record.id, 3);
}

#[tokio::test]
async fn test_tags_come_from_store() {
    let (service, _store) = loaded_service().await;
    let tags = service.tags().await.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "初診");
}

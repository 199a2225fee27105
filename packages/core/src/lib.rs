//! Mediboard Core Memo Logic
//!
//! This crate provides the memo-tree data management for the Mediboard
//! medical facility directory: a per-scope forest of hierarchical memos with
//! drag-and-drop reordering, tag/search filtering, and a thin client for the
//! external REST backend that owns the durable data.
//!
//! # Architecture
//!
//! - **Flat wire records**: the backend stores memos as a flat list
//!   (`id`, `parent_id`, `sort_order`); the forest is derived, never persisted
//! - **Pure tree core**: building, cycle checking, moving, and filtering are
//!   synchronous pure functions over immutable input
//! - **Optimistic persistence**: moves update local state first and send one
//!   batch reorder call; a failed call is surfaced, never auto-rolled-back
//!
//! # Modules
//!
//! - [`models`] - Data structures (MemoRecord, MemoTag, scope, view state)
//! - [`tree`] - Forest builder, ancestry checker, subtree mover, filter
//! - [`services`] - MemoService orchestration over a backend store
//! - [`api`] - Backend store trait, HTTP client, reorder payload types

pub mod api;
pub mod models;
pub mod services;
pub mod tree;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use tree::*;

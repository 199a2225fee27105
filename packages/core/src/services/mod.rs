//! Business Services
//!
//! - `MemoService` - per-scope memo state, CRUD, and optimistic move
//!   persistence over a [`crate::api::MemoStore`]
//!
//! Services coordinate between the pure tree core and the backend boundary,
//! owning the authoritative local copy of a scope's flat record list.

pub mod error;
pub mod memo_service;

pub use error::MemoServiceError;
pub use memo_service::{MemoService, MoveStatus};

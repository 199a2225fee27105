//! Backend API Layer
//!
//! The durable memo data lives in an external backend service reached over
//! HTTP JSON. This module defines the boundary:
//!
//! - [`MemoStore`] - trait the service layer talks to, so tests can swap in
//!   an in-memory store
//! - [`HttpMemoStore`] - reqwest client against the real backend
//! - [`ReorderEntry`] - the batch reorder payload triple
//!
//! The core commits only to the payload shapes; endpoint paths and methods
//! are an implementation detail of [`HttpMemoStore`].

mod error;
mod http;
mod store;

pub use error::ApiError;
pub use http::{HttpMemoStore, HttpStoreConfig};
pub use store::{MemoStore, ReorderEntry};

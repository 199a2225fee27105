//! Service Layer Error Types

use thiserror::Error;

use crate::api::ApiError;
use crate::tree::TreeError;

/// Memo service operation errors.
#[derive(Error, Debug)]
pub enum MemoServiceError {
    /// Memo not found in the loaded scope
    #[error("Memo not found: {id}")]
    MemoNotFound { id: i64 },

    /// Update carries no changes or targets an unsaved memo
    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    /// Stored hierarchy violates the acyclicity invariant; needs
    /// out-of-band repair, not a retry
    #[error("Memo hierarchy is inconsistent: {0}")]
    DataInconsistency(#[from] TreeError),

    /// Backend call failed; local optimistic state is kept and the caller
    /// may refresh authoritative data
    #[error("Failed to persist memo change: {0}")]
    PersistenceFailed(#[from] ApiError),
}

impl MemoServiceError {
    /// Create a memo not found error
    pub fn memo_not_found(id: i64) -> Self {
        Self::MemoNotFound { id }
    }

    /// Create an invalid update error
    pub fn invalid_update(msg: impl Into<String>) -> Self {
        Self::InvalidUpdate(msg.into())
    }
}

//! Backend API Error Types

use thiserror::Error;

/// Errors from the backend HTTP boundary.
///
/// All variants are recoverable: the caller keeps its local state and may
/// re-fetch authoritative data when it chooses to.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, etc.)
    #[error("request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("unexpected status {status} from {endpoint}: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected JSON shape
    #[error("failed to decode response from {endpoint}: {source}")]
    DecodeFailed {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Create a request failed error
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(
        endpoint: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a decode failed error
    pub fn decode_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::DecodeFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

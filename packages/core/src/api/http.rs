//! HTTP implementation of [`MemoStore`] against the external backend.
//!
//! Thin JSON wrappers only: no retry, no caching. A reorder request, once
//! issued, is not cancelable; the service layer documents the optimistic
//! update semantics around that.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiError, MemoStore, ReorderEntry};
use crate::models::{MemoRecord, MemoScope, MemoTag, MemoUpdate};

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// reqwest-backed [`MemoStore`].
pub struct HttpMemoStore {
    client: Client,
    config: HttpStoreConfig,
}

impl HttpMemoStore {
    pub fn new(config: HttpStoreConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::request_failed(config.base_url.clone(), e))?;
        Ok(Self { client, config })
    }

    /// Collection path for a scope's memos.
    fn memos_path(&self, scope: MemoScope) -> String {
        match scope {
            MemoScope::General => format!("{}/memos/general", self.config.base_url),
            MemoScope::Facility(id) => format!("{}/facilities/{}/memos", self.config.base_url, id),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(url, e))?;
        Self::decode(url, response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = builder
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(url, e))?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::unexpected_status(url, status.as_u16(), body));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::decode_failed(url, e))
    }

    async fn expect_success(url: &str, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::unexpected_status(url, status.as_u16(), body));
        }
        Ok(())
    }
}

#[async_trait]
impl MemoStore for HttpMemoStore {
    async fn fetch_memos(
        &self,
        scope: MemoScope,
        include_deleted: bool,
    ) -> Result<Vec<MemoRecord>, ApiError> {
        let url = format!(
            "{}?include_deleted={}",
            self.memos_path(scope),
            include_deleted
        );
        self.get_json(&url).await
    }

    async fn create_memo(
        &self,
        scope: MemoScope,
        record: &MemoRecord,
    ) -> Result<MemoRecord, ApiError> {
        let url = self.memos_path(scope);
        self.send_json(self.client.post(&url), &url, record).await
    }

    async fn update_memo(&self, id: i64, update: &MemoUpdate) -> Result<MemoRecord, ApiError> {
        let url = format!("{}/memos/{}", self.config.base_url, id);
        self.send_json(self.client.put(&url), &url, update).await
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> Result<(), ApiError> {
        // Soft delete and restore are separate backend routes
        let url = if deleted {
            format!("{}/memos/{}", self.config.base_url, id)
        } else {
            format!("{}/memos/{}/restore", self.config.base_url, id)
        };
        let builder = if deleted {
            self.client.delete(&url)
        } else {
            self.client.post(&url)
        };
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, e))?;
        Self::expect_success(&url, response).await
    }

    async fn reorder(&self, scope: MemoScope, entries: &[ReorderEntry]) -> Result<(), ApiError> {
        let url = format!("{}/reorder", self.memos_path(scope));
        let response = self
            .client
            .post(&url)
            .json(entries)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, e))?;
        Self::expect_success(&url, response).await
    }

    async fn fetch_tags(&self) -> Result<Vec<MemoTag>, ApiError> {
        let url = format!("{}/memo-tags", self.config.base_url);
        self.get_json(&url).await
    }
}

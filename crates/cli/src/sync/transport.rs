// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the remote HTTP API.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use kelist_core::protocol::ErrorBody;
use kelist_core::{migrate, BackupAck, Board, Health, SyncAck, SyncInfo};
use serde::de::DeserializeOwned;

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by transport methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Transport trait for the remote board store.
///
/// Methods take `&self` so that several pushes can be in flight at once.
pub trait Transport: Send + Sync {
    /// Probe server liveness.
    fn health(&self) -> TransportFuture<'_, Health>;

    /// Fetch the full board array, upgrading legacy records.
    fn fetch_boards(&self) -> TransportFuture<'_, Vec<Board>>;

    /// Replace the server's board array with `boards`.
    fn push_boards(&self, boards: Vec<Board>) -> TransportFuture<'_, SyncAck>;

    /// Ask the server to write a backup of its store.
    fn backup(&self) -> TransportFuture<'_, BackupAck>;

    /// Fetch the server's last-sync record.
    fn sync_info(&self) -> TransportFuture<'_, SyncInfo>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `base_url`
    /// (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str) -> TransportResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpTransport {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// API base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }
}

fn network(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

/// Decode a success body, or turn a failure status into [`TransportError::Server`]
/// carrying the server's `{"error": ...}` message when present.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> TransportResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if text.is_empty() => status.to_string(),
            Err(_) => text,
        };
        return Err(TransportError::Server {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

impl Transport for HttpTransport {
    fn health(&self) -> TransportFuture<'_, Health> {
        Box::pin(self.get("health"))
    }

    fn fetch_boards(&self) -> TransportFuture<'_, Vec<Board>> {
        Box::pin(async move {
            let value: serde_json::Value = self.get("boards").await?;
            migrate::upgrade(value).map_err(|e| TransportError::Decode(e.to_string()))
        })
    }

    fn push_boards(&self, boards: Vec<Board>) -> TransportFuture<'_, SyncAck> {
        Box::pin(async move {
            let response = self
                .http
                .post(self.url("boards"))
                .json(&boards)
                .send()
                .await
                .map_err(network)?;
            read_json(response).await
        })
    }

    fn backup(&self) -> TransportFuture<'_, BackupAck> {
        Box::pin(async move {
            let response = self
                .http
                .post(self.url("backup"))
                .send()
                .await
                .map_err(network)?;
            read_json(response).await
        })
    }

    fn sync_info(&self) -> TransportFuture<'_, SyncInfo> {
        Box::pin(self.get("sync-info"))
    }
}

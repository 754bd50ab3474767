// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync client for the remote board store.
//!
//! Provides a high-level interface for:
//! - Loading the server's board array
//! - Pushing whole snapshots with linear backoff
//! - Tracking whether sync is enabled (online) or disabled (offline)
//! - Health, backup and sync-info requests

use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use kelist_core::{BackupAck, Board, SyncAck, SyncInfo};
use tracing::{debug, info, warn};

use super::delay::{Delay, TokioDelay};
use super::transport::{HttpTransport, Transport, TransportError, TransportResult};
use crate::notify::{Notice, Notifier};

/// Retry and timeout policy for the sync client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Total push attempts before giving up, including the first.
    pub max_attempts: u32,
    /// Base delay; the wait after failed attempt `n` is `n * retry_delay`.
    pub retry_delay: Duration,
    /// Limit on any single request.
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            max_attempts: 3,
            retry_delay: Duration::from_millis(2_000),
            timeout: Duration::from_millis(10_000),
        }
    }
}

impl SyncConfig {
    /// Wait after failed attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay.saturating_mul(attempt)
    }
}

/// Error type for sync client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Every push attempt failed.
    #[error("sync failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<SyncError> },

    /// Push was cancelled before it finished.
    #[error("sync cancelled")]
    Cancelled,

    /// Background push task died.
    #[error("sync task failed: {0}")]
    TaskFailed(String),
}

/// Result type for sync client operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Transient sync status shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// A push was acknowledged.
    Synced { sync_id: String },
    /// A push failed and will be retried after `delay`.
    Retrying { attempt: u32, delay: Duration },
    /// Retries are exhausted; changes stay local.
    Offline,
}

#[derive(Debug, Default)]
struct Shared {
    enabled: bool,
    retry_count: u32,
    last_ack: Option<SyncAck>,
}

/// Sync client for remote operations.
///
/// Shared between the session and its background pushes through an [`Arc`].
pub struct SyncClient<T: Transport = HttpTransport, D: Delay = TokioDelay> {
    config: SyncConfig,
    transport: T,
    delay: D,
    shared: Mutex<Shared>,
    notifier: Notifier,
}

impl SyncClient<HttpTransport, TokioDelay> {
    /// Create a client for the API at `url`.
    pub fn new(config: SyncConfig, url: &str, notifier: Notifier) -> SyncResult<Self> {
        let transport = HttpTransport::new(url)?;
        Ok(Self::with_transport(config, transport, TokioDelay, notifier))
    }
}

impl<T: Transport, D: Delay> SyncClient<T, D> {
    /// Create a client with a custom transport and delay (for testing).
    pub fn with_transport(config: SyncConfig, transport: T, delay: D, notifier: Notifier) -> Self {
        SyncClient {
            config,
            transport,
            delay,
            shared: Mutex::new(Shared::default()),
            notifier,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether the last remote exchange succeeded.
    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Failed attempts of the push currently retrying.
    pub fn retry_count(&self) -> u32 {
        self.lock().retry_count
    }

    /// Most recent successful push acknowledgement.
    pub fn last_ack(&self) -> Option<SyncAck> {
        self.lock().last_ack.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    /// Run one request under the configured timeout.
    async fn bounded<R>(&self, request: impl Future<Output = TransportResult<R>>) -> SyncResult<R> {
        match tokio::time::timeout(self.config.timeout, request).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(SyncError::Timeout(self.config.timeout)),
        }
    }

    /// Load the server's boards. Success enables sync; failure disables it.
    pub async fn fetch_all(&self) -> SyncResult<Vec<Board>> {
        let result = self.bounded(self.transport.fetch_boards()).await;
        self.set_enabled(result.is_ok());
        match &result {
            Ok(boards) => debug!(count = boards.len(), "fetched boards"),
            Err(e) => warn!(error = %e, "failed to fetch boards"),
        }
        result
    }

    /// One push attempt, without retry.
    pub async fn push_once(&self, boards: Vec<Board>) -> SyncResult<SyncAck> {
        self.bounded(self.transport.push_boards(boards)).await
    }

    /// Push `boards`, retrying with linear backoff.
    ///
    /// Success enables sync, resets the retry count and records the ack.
    /// Exhausting `max_attempts` disables sync and emits
    /// [`SyncStatus::Offline`].
    pub async fn push_all(&self, boards: Vec<Board>) -> SyncResult<SyncAck> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.push_once(boards.clone()).await {
                Ok(ack) => {
                    {
                        let mut shared = self.lock();
                        shared.enabled = true;
                        shared.retry_count = 0;
                        shared.last_ack = Some(ack.clone());
                    }
                    info!(sync_id = %ack.sync_id, attempt, "boards synced");
                    self.notifier.emit(Notice::Sync(SyncStatus::Synced {
                        sync_id: ack.sync_id.clone(),
                    }));
                    return Ok(ack);
                }
                Err(e) if attempt >= max_attempts => {
                    {
                        let mut shared = self.lock();
                        shared.enabled = false;
                        shared.retry_count = 0;
                    }
                    warn!(error = %e, attempts = attempt, "sync failed, working offline");
                    self.notifier.emit(Notice::Sync(SyncStatus::Offline));
                    return Err(SyncError::RetriesExhausted {
                        attempts: attempt,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    self.lock().retry_count = attempt;
                    let delay = self.config.backoff(attempt);
                    warn!(error = %e, attempt, delay_ms = delay.as_millis() as u64, "sync failed, retrying");
                    self.notifier.emit(Notice::Sync(SyncStatus::Retrying { attempt, delay }));
                    self.delay.sleep(delay).await;
                }
            }
        }
    }

    /// Probe the server. Sets and returns the enabled flag.
    pub async fn health_check(&self) -> bool {
        let healthy = match self.bounded(self.transport.health()).await {
            Ok(health) => {
                debug!(status = %health.status, "remote healthy");
                true
            }
            Err(e) => {
                warn!(error = %e, "remote health check failed");
                false
            }
        };
        self.set_enabled(healthy);
        healthy
    }

    /// Ask the server to back up its store.
    pub async fn backup(&self) -> SyncResult<BackupAck> {
        self.bounded(self.transport.backup()).await
    }

    /// Fetch the server's last-sync record.
    pub async fn sync_info(&self) -> SyncResult<SyncInfo> {
        self.bounded(self.transport.sync_info()).await
    }
}


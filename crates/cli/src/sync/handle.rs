// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Handle to a background push.

use std::sync::Arc;

use kelist_core::{Board, SyncAck};
use tokio::task::JoinHandle;

use super::client::{SyncClient, SyncError, SyncResult};
use super::delay::Delay;
use super::transport::Transport;

/// A push (with its retries) running on the tokio runtime.
///
/// Dropping the handle detaches the push; [`PushHandle::cancel`] stops it,
/// including any pending backoff wait.
#[derive(Debug)]
pub struct PushHandle {
    task: JoinHandle<SyncResult<SyncAck>>,
}

impl PushHandle {
    /// Spawn `client.push_all(boards)`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, D>(client: Arc<SyncClient<T, D>>, boards: Vec<Board>) -> Self
    where
        T: Transport + 'static,
        D: Delay + 'static,
    {
        let task = tokio::spawn(async move { client.push_all(boards).await });
        PushHandle { task }
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the push to finish.
    pub async fn wait(self) -> SyncResult<SyncAck> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SyncError::Cancelled),
            Err(e) => Err(SyncError::TaskFailed(e.to_string())),
        }
    }
}

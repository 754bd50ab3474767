// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change and sync-status notifications for the render layer.

use tokio::sync::broadcast;

use crate::sync::SyncStatus;

const CHANNEL_CAPACITY: usize = 64;

/// Something a view may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Board state changed; re-render.
    Changed,
    /// Transient sync status for display.
    Sync(SyncStatus),
}

/// Fan-out of [`Notice`]s to any number of subscribers.
///
/// Emitting with no subscribers is not an error.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Notifier { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    pub fn emit(&self, notice: Notice) {
        // Err only means nobody is listening.
        let _ = self.tx.send(notice);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The reconciliation engine.
//!
//! A [`Session`] owns the in-memory [`State`] and keeps it in step with
//! the local snapshot and, when configured, the remote store:
//!
//! - On open, the remote snapshot wins; the local one is the fallback.
//! - After every change, the whole collection is saved locally, a
//!   [`Notice::Changed`] is emitted, and a push is started in the background.
//! - Push failures never surface as errors of the change that caused them.

use std::sync::Arc;

use kelist_core::{BackupAck, Board, ClockSource, LocalStore, State, SyncAck, SyncInfo, SystemClock};
use tracing::{debug, info, warn};

use crate::notify::{Notice, Notifier};
use crate::sync::{Delay, HttpTransport, PushHandle, SyncClient, SyncResult, TokioDelay, Transport};

/// Where the boards came from when the session was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
}

pub struct Session<C: ClockSource = SystemClock, T: Transport = HttpTransport, D: Delay = TokioDelay> {
    state: State<C>,
    store: Box<dyn LocalStore>,
    remote: Option<Arc<SyncClient<T, D>>>,
    notifier: Notifier,
    pushes: Vec<PushHandle>,
}

impl<C, T, D> Session<C, T, D>
where
    C: ClockSource,
    T: Transport + 'static,
    D: Delay + 'static,
{
    /// Create a session. Pass `None` for `remote` to run local-only.
    pub fn new(
        state: State<C>,
        store: Box<dyn LocalStore>,
        remote: Option<SyncClient<T, D>>,
        notifier: Notifier,
    ) -> Self {
        Session {
            state,
            store,
            remote: remote.map(Arc::new),
            notifier,
            pushes: Vec::new(),
        }
    }

    /// Load boards: remote first, then the local snapshot. Probes remote
    /// health afterwards so the enabled flag reflects reality.
    pub async fn load(&mut self) -> Source {
        let mut source = Source::Local;
        if let Some(remote) = &self.remote {
            match remote.fetch_all().await {
                Ok(boards) => {
                    info!(count = boards.len(), "loaded boards from remote");
                    self.state.replace_all(boards);
                    if let Err(e) = self.store.save(self.state.boards()) {
                        warn!(error = %e, "failed to save local snapshot");
                    }
                    source = Source::Remote;
                }
                Err(e) => warn!(error = %e, "remote unavailable, using local snapshot"),
            }
        }
        if source == Source::Local {
            let boards = self.store.load();
            debug!(count = boards.len(), "loaded boards from local snapshot");
            self.state.replace_all(boards);
        }
        if let Some(remote) = &self.remote {
            remote.health_check().await;
        }
        self.notifier.emit(Notice::Changed);
        source
    }

    pub fn state(&self) -> &State<C> {
        &self.state
    }

    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.state.current_board()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn remote(&self) -> Option<&SyncClient<T, D>> {
        self.remote.as_deref()
    }

    /// Whether sync is configured and the last remote exchange succeeded.
    pub fn is_sync_enabled(&self) -> bool {
        self.remote.as_ref().is_some_and(|r| r.is_enabled())
    }

    /// Background pushes not yet finished.
    pub fn pending_pushes(&self) -> usize {
        self.pushes.iter().filter(|h| !h.is_finished()).count()
    }

    /// Persist, notify and sync after a change.
    fn commit(&mut self) {
        if let Err(e) = self.store.save(self.state.boards()) {
            warn!(error = %e, "failed to save local snapshot");
        }
        self.notifier.emit(Notice::Changed);
        self.schedule_push();
    }

    fn schedule_push(&mut self) {
        let Some(remote) = &self.remote else {
            return;
        };
        if tokio::runtime::Handle::try_current().is_err() {
            debug!("no async runtime, change stays local");
            return;
        }
        self.pushes.retain(|h| !h.is_finished());
        self.pushes.push(PushHandle::spawn(
            Arc::clone(remote),
            self.state.boards().to_vec(),
        ));
    }

    fn committed(&mut self, changed: bool) -> bool {
        if changed {
            self.commit();
        }
        changed
    }

    fn committed_id(&mut self, id: Option<String>) -> Option<String> {
        if id.is_some() {
            self.commit();
        }
        id
    }

    /// Wait for every background push. Returns the result of the most
    /// recently started one, or `None` if nothing was pending.
    pub async fn settle(&mut self) -> Option<SyncResult<SyncAck>> {
        let mut last = None;
        for handle in self.pushes.drain(..) {
            last = Some(handle.wait().await);
        }
        last
    }

    /// Abort every background push, including pending backoff waits.
    pub fn cancel_pending(&mut self) {
        for handle in self.pushes.drain(..) {
            handle.cancel();
        }
    }

    /// Push the current collection now and wait for the outcome.
    ///
    /// Returns `None` in local-only mode.
    pub async fn sync_now(&self) -> Option<SyncResult<SyncAck>> {
        let remote = self.remote.as_ref()?;
        Some(remote.push_all(self.state.boards().to_vec()).await)
    }

    /// Ask the server to back up its store. `None` in local-only mode.
    pub async fn backup(&self) -> Option<SyncResult<BackupAck>> {
        let remote = self.remote.as_ref()?;
        Some(remote.backup().await)
    }

    /// Fetch the server's last-sync record. `None` in local-only mode.
    pub async fn sync_info(&self) -> Option<SyncResult<SyncInfo>> {
        let remote = self.remote.as_ref()?;
        Some(remote.sync_info().await)
    }

    // Boards

    pub fn create_board(&mut self, title: &str) -> Option<String> {
        let id = self.state.create_board(title);
        self.committed_id(id)
    }

    pub fn rename_board(&mut self, board_id: &str, title: &str) -> bool {
        let changed = self.state.rename_board(board_id, title);
        self.committed(changed)
    }

    pub fn delete_board(&mut self, board_id: &str) -> bool {
        let changed = self.state.delete_board(board_id);
        self.committed(changed)
    }

    /// Select a board. Selection is not persisted or synced.
    pub fn switch_board(&mut self, board_id: &str) -> bool {
        let changed = self.state.switch_board(board_id);
        if changed {
            self.notifier.emit(Notice::Changed);
        }
        changed
    }

    // Categories

    pub fn add_category(&mut self, name: &str, color: Option<&str>) -> Option<String> {
        let id = self.state.add_category(name, color);
        self.committed_id(id)
    }

    pub fn edit_category(&mut self, category_id: &str, name: &str, color: Option<&str>) -> bool {
        let changed = self.state.edit_category(category_id, name, color);
        self.committed(changed)
    }

    pub fn delete_category(&mut self, category_id: &str) -> bool {
        let changed = self.state.delete_category(category_id);
        self.committed(changed)
    }

    pub fn move_category_up(&mut self, category_id: &str) -> bool {
        let changed = self.state.move_category_up(category_id);
        self.committed(changed)
    }

    pub fn move_category_down(&mut self, category_id: &str) -> bool {
        let changed = self.state.move_category_down(category_id);
        self.committed(changed)
    }

    // Items

    pub fn add_item(&mut self, text: &str, category_id: Option<&str>) -> Option<String> {
        let id = self.state.add_item(text, category_id);
        self.committed_id(id)
    }

    pub fn edit_item(&mut self, item_id: &str, text: &str) -> bool {
        let changed = self.state.edit_item(item_id, text);
        self.committed(changed)
    }

    pub fn toggle_item(&mut self, item_id: &str) -> bool {
        let changed = self.state.toggle_item(item_id);
        self.committed(changed)
    }

    pub fn delete_item(&mut self, item_id: &str) -> bool {
        let changed = self.state.delete_item(item_id);
        self.committed(changed)
    }

    pub fn move_item_to_category(&mut self, item_id: &str, target_category: Option<&str>) -> bool {
        let changed = self.state.move_item_to_category(item_id, target_category);
        self.committed(changed)
    }

    pub fn reorder_item(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        insert_before: bool,
        target_category: Option<&str>,
    ) -> bool {
        let changed = self
            .state
            .reorder_item(dragged_id, target_id, insert_before, target_category);
        self.committed(changed)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

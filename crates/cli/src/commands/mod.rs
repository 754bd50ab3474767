// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod category;
pub mod item;
pub mod remote;
pub mod resolve;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use kelist_core::{Board, FileStore, State};
use tokio::sync::broadcast::Receiver;
use tracing::debug;

use crate::config::{self, Config};
use crate::display::format_sync_status;
use crate::error::{Error, Result};
use crate::notify::{Notice, Notifier};
use crate::session::Session;
use crate::sync::{SyncClient, SyncStatus};

/// Open the session for this invocation and load boards.
///
/// Remote sync is used when configured (in `config.toml` or through
/// `KELIST_API_URL`) unless `offline` is set.
pub async fn open_session(offline: bool) -> Result<Session> {
    let data_dir = config::data_dir()?;
    let config = Config::load(&data_dir)?.with_api_url(crate::env::api_url());
    let notifier = Notifier::new();

    let remote = match config.remote.as_ref().filter(|_| !offline) {
        Some(remote) => {
            config.validate()?;
            Some(SyncClient::new(remote.sync_config(), &remote.url, notifier.clone())?)
        }
        None => None,
    };

    let store = FileStore::in_dir(&data_dir);
    debug!(path = %store.path().display(), remote = remote.is_some(), "opening session");
    let mut session = Session::new(State::new(), Box::new(store), remote, notifier);
    let source = session.load().await;
    debug!(?source, boards = session.boards().len(), "session loaded");
    Ok(session)
}

/// Make the board matching `query` current.
pub fn select_board(session: &mut Session, query: &str) -> Result<()> {
    let id = resolve::board(session.boards(), query)?.id.clone();
    session.switch_board(&id);
    Ok(())
}

/// The board commands act on.
pub fn current_board(session: &Session) -> Result<&Board> {
    session.current_board().ok_or(Error::NoBoard)
}

/// Wait for background pushes and report sync trouble on stderr.
pub async fn finish(session: &mut Session, notices: &mut Receiver<Notice>) {
    session.settle().await;
    while let Ok(notice) = notices.try_recv() {
        match notice {
            Notice::Sync(status @ (SyncStatus::Retrying { .. } | SyncStatus::Offline)) => {
                eprintln!("warning: {}", format_sync_status(&status));
            }
            Notice::Sync(status) => debug!("{}", format_sync_status(&status)),
            Notice::Changed => {}
        }
    }
}

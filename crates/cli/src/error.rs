// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::SyncError;

/// All possible errors that can occur in the kelist library.
///
/// Model operations never fail; these come from resolving command-line
/// references, configuration and explicit remote commands.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no boards yet\n  hint: create one with 'kelist board new <title>'")]
    NoBoard,

    #[error("board not found: {0}")]
    BoardNotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("ambiguous {kind} '{query}' matches: {}", matches.join(", "))]
    Ambiguous {
        kind: &'static str,
        query: String,
        matches: Vec<String>,
    },

    #[error("no remote configured\n  hint: add a [remote] section to {0} or set KELIST_API_URL")]
    RemoteNotConfigured(String),

    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error(transparent)]
    Core(#[from] kelist_core::Error),

    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for kelist operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

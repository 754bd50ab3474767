// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the remote board store API.
//!
//! The API is a handful of JSON endpoints:
//! - `GET /api/health` returns [`Health`]
//! - `GET /api/boards` returns the board array
//! - `POST /api/boards` replaces the board array and returns [`SyncAck`]
//! - `POST /api/backup` returns [`BackupAck`]
//! - `GET /api/sync-info` returns [`SyncInfo`]

use serde::{Deserialize, Serialize};

/// Health probe response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

/// Acknowledgement of a successful push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncAck {
    #[serde(default)]
    pub success: bool,
    /// Server-assigned id of this sync.
    pub sync_id: String,
    /// Server time of this sync.
    pub timestamp: String,
}

/// Acknowledgement of a server-side backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupAck {
    #[serde(default)]
    pub success: bool,
    /// Name of the backup file written by the server.
    pub backup_file: String,
}

/// Last sync recorded by the server. Both fields are null before any sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncInfo {
    #[serde(default)]
    pub last_sync: Option<String>,
    #[serde(default)]
    pub sync_id: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;

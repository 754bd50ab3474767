// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable local persistence of the full board collection.
//!
//! The store holds a single snapshot under one key. Every save overwrites
//! the whole snapshot; there are no partial writes. Loading never fails:
//! a missing or unreadable snapshot is treated as "no prior data".

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::board::Board;
use crate::error::Result;
use crate::migrate;

/// File name of the snapshot inside the data directory.
pub const BOARDS_KEY: &str = "kelist-boards.json";

/// Whole-snapshot persistence of the board collection.
pub trait LocalStore: Send + Sync {
    /// Loads the last saved snapshot, or an empty collection when there is
    /// none or it cannot be read.
    fn load(&self) -> Vec<Board>;

    /// Replaces the stored snapshot with `boards`.
    fn save(&self, boards: &[Board]) -> Result<()>;
}

/// Snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Uses the snapshot file at `path`. Nothing is created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Uses the default snapshot file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(BOARDS_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Vec<Board>>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(migrate::parse(&json)?))
    }
}

impl LocalStore for FileStore {
    fn load(&self) -> Vec<Board> {
        match self.read() {
            Ok(Some(boards)) => boards,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable local snapshot");
                Vec::new()
            }
        }
    }

    fn save(&self, boards: &[Board]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so a crash never leaves half a snapshot.
        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string(boards)?;
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

/// In-memory store holding the serialized snapshot.
///
/// Keeps the JSON text rather than the boards so loads go through the same
/// upgrade path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with raw JSON, which may be invalid.
    pub fn with_json(json: impl Into<String>) -> Self {
        MemoryStore { snapshot: Mutex::new(Some(json.into())) }
    }

    /// Returns the raw stored JSON, if any save happened.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl LocalStore for MemoryStore {
    fn load(&self) -> Vec<Board> {
        let Some(json) = self.snapshot() else {
            return Vec::new();
        };
        migrate::parse(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable in-memory snapshot");
            Vec::new()
        })
    }

    fn save(&self, boards: &[Board]) -> Result<()> {
        let json = serde_json::to_string(boards)?;
        *self.snapshot.lock().unwrap_or_else(|e| e.into_inner()) = Some(json);
        Ok(())
    }
}

impl<S: LocalStore + ?Sized> LocalStore for std::sync::Arc<S> {
    fn load(&self) -> Vec<Board> {
        (**self).load()
    }

    fn save(&self, boards: &[Board]) -> Result<()> {
        (**self).save(boards)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

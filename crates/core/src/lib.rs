// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kelist-core: domain library for the kelist board manager.
//!
//! This crate holds the board/category/item model, the drag-and-drop
//! reordering algorithms, display views, legacy data upgrade and local
//! snapshot storage. It is synchronous and knows nothing about the network;
//! the `kelist` crate composes it with remote sync.

pub mod board;
pub mod clock;
pub mod display;
pub mod error;
pub mod id;
pub mod migrate;
pub mod model;
pub mod protocol;
pub mod reorder;
pub mod store;

pub use board::{Board, Category, Item};
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use id::IdGenerator;
pub use model::State;
pub use protocol::{BackupAck, Health, SyncAck, SyncInfo};
pub use reorder::Placement;
pub use store::{FileStore, LocalStore, MemoryStore};

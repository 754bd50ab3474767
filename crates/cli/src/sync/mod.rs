// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote sync for the board store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────►│  Transport  │────►│   Remote    │
//! │ (SyncClient)│◄────│   (trait)   │◄────│  HTTP API   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Delay     │  (backoff between push attempts)
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - Whole-snapshot pushes: every change replaces the server's board array
//! - Linear backoff between failed pushes, then offline mode
//! - Per-request timeout
//! - Cancellable background pushes via [`PushHandle`]
//! - Injectable transport and delay traits for testing

mod client;
mod delay;
mod handle;
mod transport;

pub use client::{SyncClient, SyncConfig, SyncError, SyncResult, SyncStatus};
pub use delay::{Delay, TokioDelay};
pub use handle::PushHandle;
pub use transport::{HttpTransport, Transport, TransportError, TransportResult};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod client_tests;

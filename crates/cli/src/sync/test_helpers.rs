// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use kelist_core::{Board, Item};
use tokio::sync::{mpsc, Semaphore};

use super::delay::{Delay, DelayFuture};

/// Delay that records requested waits and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Delay for RecordingDelay {
    fn sleep(&self, duration: Duration) -> DelayFuture<'_> {
        self.waits.lock().unwrap().push(duration);
        Box::pin(async {})
    }
}

/// Delay that reports each wait and holds it until the test releases it,
/// so state can be inspected between attempts.
pub struct SteppedDelay {
    waits: mpsc::UnboundedSender<Duration>,
    release: Arc<Semaphore>,
}

/// Test side of a [`SteppedDelay`].
pub struct Stepper {
    waits: mpsc::UnboundedReceiver<Duration>,
    release: Arc<Semaphore>,
}

pub fn stepped_delay() -> (SteppedDelay, Stepper) {
    let (tx, rx) = mpsc::unbounded_channel();
    let release = Arc::new(Semaphore::new(0));
    (
        SteppedDelay {
            waits: tx,
            release: Arc::clone(&release),
        },
        Stepper { waits: rx, release },
    )
}

impl Stepper {
    /// The next wait the client entered, or `None` once it is dropped.
    pub async fn next_wait(&mut self) -> Option<Duration> {
        self.waits.recv().await
    }

    /// Let the current wait finish.
    pub fn release(&self) {
        self.release.add_permits(1);
    }
}

impl Delay for SteppedDelay {
    fn sleep(&self, duration: Duration) -> DelayFuture<'_> {
        let _ = self.waits.send(duration);
        Box::pin(async move {
            if let Ok(permit) = self.release.acquire().await {
                permit.forget();
            }
        })
    }
}

pub fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

/// A board with one uncategorized item per text.
pub fn make_board(id: &str, title: &str, items: &[&str]) -> Board {
    let mut board = Board::new(id.to_string(), title.to_string(), at(1_000));
    for (i, text) in items.iter().enumerate() {
        board.items.push(Item::new(
            format!("{}-{}", id, i),
            text.to_string(),
            None,
            at(1_000 + i as i64),
        ));
    }
    board
}

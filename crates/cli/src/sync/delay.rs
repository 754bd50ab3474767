// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Injectable sleep used between push attempts.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`Delay::sleep`].
pub type DelayFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of backoff waits.
pub trait Delay: Send + Sync {
    fn sleep(&self, duration: Duration) -> DelayFuture<'_>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> DelayFuture<'_> {
        Box::pin(tokio::time::sleep(duration))
    }
}

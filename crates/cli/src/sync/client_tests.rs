// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the sync client module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use super::client::{SyncClient, SyncConfig, SyncError, SyncStatus};
use super::test_helpers::{make_board, stepped_delay, RecordingDelay};
use super::transport::TransportError;
use super::transport_tests::MockTransport;
use crate::notify::{Notice, Notifier};
use tokio::sync::broadcast::Receiver;
use yare::parameterized;

struct Harness {
    client: SyncClient<MockTransport, RecordingDelay>,
    mock: MockTransport,
    delay: RecordingDelay,
    notices: Receiver<Notice>,
}

fn harness(config: SyncConfig) -> Harness {
    let mock = MockTransport::new();
    let delay = RecordingDelay::new();
    let notifier = Notifier::new();
    let notices = notifier.subscribe();
    let client = SyncClient::with_transport(config, mock.clone(), delay.clone(), notifier);
    Harness {
        client,
        mock,
        delay,
        notices,
    }
}

fn drain(rx: &mut Receiver<Notice>) -> Vec<Notice> {
    let mut out = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        out.push(notice);
    }
    out
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_default_config() {
    let config = SyncConfig::default();
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.retry_delay, ms(2_000));
    assert_eq!(config.timeout, ms(10_000));
}

#[parameterized(
    first = { 1, 2_000 },
    second = { 2, 4_000 },
    fifth = { 5, 10_000 },
)]
fn test_backoff_is_linear(attempt: u32, expected_ms: u64) {
    assert_eq!(SyncConfig::default().backoff(attempt), ms(expected_ms));
}

#[tokio::test]
async fn test_push_succeeds_first_try() {
    let mut h = harness(SyncConfig::default());
    assert!(!h.client.is_enabled());

    let ack = h.client.push_all(vec![make_board("1", "Groceries", &["milk"])]).await.unwrap();

    assert_eq!(ack.sync_id, "sync-1");
    assert!(h.client.is_enabled());
    assert_eq!(h.client.last_ack(), Some(ack));
    assert!(h.delay.waits().is_empty());
    assert_eq!(h.mock.stored_boards()[0].title, "Groceries");
    assert_eq!(
        drain(&mut h.notices),
        vec![Notice::Sync(SyncStatus::Synced { sync_id: "sync-1".into() })]
    );
}

#[tokio::test]
async fn test_push_fails_twice_then_succeeds() {
    let mut h = harness(SyncConfig::default());
    h.mock.fail_next_pushes(2);

    let ack = h.client.push_all(vec![make_board("1", "Groceries", &[])]).await.unwrap();

    assert_eq!(ack.sync_id, "sync-1");
    assert_eq!(h.mock.push_attempts(), 3);
    assert_eq!(h.delay.waits(), vec![ms(2_000), ms(4_000)]);
    assert!(h.client.is_enabled());
    assert_eq!(h.client.retry_count(), 0);
    assert_eq!(
        drain(&mut h.notices),
        vec![
            Notice::Sync(SyncStatus::Retrying { attempt: 1, delay: ms(2_000) }),
            Notice::Sync(SyncStatus::Retrying { attempt: 2, delay: ms(4_000) }),
            Notice::Sync(SyncStatus::Synced { sync_id: "sync-1".into() }),
        ]
    );
}

#[tokio::test]
async fn test_sync_stays_disabled_until_third_attempt_succeeds() {
    let mock = MockTransport::new();
    let (delay, mut stepper) = stepped_delay();
    let client = Arc::new(SyncClient::with_transport(
        SyncConfig::default(),
        mock.clone(),
        delay,
        Notifier::new(),
    ));
    mock.fail_next_pushes(2);

    let task = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.push_all(vec![make_board("1", "Groceries", &[])]).await }
    });

    assert_eq!(stepper.next_wait().await, Some(ms(2_000)));
    assert!(!client.is_enabled());
    assert_eq!(client.retry_count(), 1);
    assert_eq!(mock.push_attempts(), 1);
    stepper.release();

    assert_eq!(stepper.next_wait().await, Some(ms(4_000)));
    assert!(!client.is_enabled());
    assert_eq!(client.retry_count(), 2);
    assert_eq!(mock.push_attempts(), 2);
    stepper.release();

    let ack = task.await.unwrap().unwrap();
    assert_eq!(ack.sync_id, "sync-1");
    assert_eq!(mock.push_attempts(), 3);
    assert!(client.is_enabled());
    assert_eq!(client.retry_count(), 0);
}

#[tokio::test]
async fn test_push_exhausts_retries_and_goes_offline() {
    let mut h = harness(SyncConfig::default());
    assert!(h.client.health_check().await);
    h.mock.set_down(true);

    let err = h.client.push_all(vec![]).await.unwrap_err();

    match err {
        SyncError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, SyncError::Transport(TransportError::Network(_))));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(h.mock.push_attempts(), 3);
    assert_eq!(h.delay.waits(), vec![ms(2_000), ms(4_000)]);
    assert!(!h.client.is_enabled());
    assert_eq!(h.client.last_ack(), None);
    assert_eq!(
        drain(&mut h.notices).last(),
        Some(&Notice::Sync(SyncStatus::Offline))
    );
}

#[tokio::test]
async fn test_intermediate_failures_keep_enabled_flag() {
    let h = harness(SyncConfig {
        max_attempts: 2,
        ..SyncConfig::default()
    });
    assert!(h.client.health_check().await);
    h.mock.fail_next_pushes(1);

    h.client.push_all(vec![]).await.unwrap();

    assert!(h.client.is_enabled());
    assert_eq!(h.delay.waits(), vec![ms(2_000)]);
}

#[tokio::test]
async fn test_zero_attempts_still_tries_once() {
    let h = harness(SyncConfig {
        max_attempts: 0,
        ..SyncConfig::default()
    });
    h.mock.set_down(true);

    let err = h.client.push_all(vec![]).await.unwrap_err();

    assert!(matches!(err, SyncError::RetriesExhausted { attempts: 1, .. }));
    assert_eq!(h.mock.push_attempts(), 1);
    assert!(h.delay.waits().is_empty());
}

#[tokio::test]
async fn test_last_success_wins() {
    let h = harness(SyncConfig::default());

    h.client.push_all(vec![make_board("1", "First", &[])]).await.unwrap();
    h.client.push_all(vec![make_board("1", "Second", &[])]).await.unwrap();

    assert_eq!(h.client.last_ack().unwrap().sync_id, "sync-2");
    assert_eq!(h.mock.stored_boards()[0].title, "Second");
}

#[tokio::test(start_paused = true)]
async fn test_push_once_times_out() {
    let h = harness(SyncConfig::default());
    h.mock.set_hanging(true);

    let err = h.client.push_once(vec![]).await.unwrap_err();

    assert_eq!(err, SyncError::Timeout(ms(10_000)));
}

#[tokio::test(start_paused = true)]
async fn test_timeouts_count_as_failed_attempts() {
    let h = harness(SyncConfig {
        max_attempts: 2,
        timeout: ms(500),
        ..SyncConfig::default()
    });
    h.mock.set_hanging(true);

    let err = h.client.push_all(vec![]).await.unwrap_err();

    match err {
        SyncError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 2);
            assert_eq!(*last, SyncError::Timeout(ms(500)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(h.mock.push_attempts(), 2);
}

#[tokio::test]
async fn test_fetch_all_sets_enabled() {
    let h = harness(SyncConfig::default());
    h.client.push_all(vec![make_board("1", "Groceries", &["milk", "eggs"])]).await.unwrap();

    let boards = h.client.fetch_all().await.unwrap();
    assert_eq!(boards[0].items.len(), 2);
    assert!(h.client.is_enabled());

    h.mock.set_down(true);
    assert!(h.client.fetch_all().await.is_err());
    assert!(!h.client.is_enabled());
}

#[tokio::test]
async fn test_health_check_toggles_enabled() {
    let h = harness(SyncConfig::default());

    assert!(h.client.health_check().await);
    assert!(h.client.is_enabled());

    h.mock.set_down(true);
    assert!(!h.client.health_check().await);
    assert!(!h.client.is_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_hanging_health_check_is_unhealthy() {
    let h = harness(SyncConfig::default());
    h.mock.set_hanging(true);

    assert!(!h.client.health_check().await);
}

#[tokio::test]
async fn test_backup_and_sync_info() {
    let h = harness(SyncConfig::default());

    let info = h.client.sync_info().await.unwrap();
    assert_eq!(info.sync_id, None);

    h.client.push_all(vec![]).await.unwrap();
    let backup = h.client.backup().await.unwrap();
    let info = h.client.sync_info().await.unwrap();

    assert_eq!(backup.backup_file, "backup-1.json");
    assert_eq!(info.sync_id.as_deref(), Some("sync-1"));
    assert_eq!(h.mock.backups(), 1);
}

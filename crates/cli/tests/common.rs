// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with a private data directory and no remote.
pub fn kelist(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("kelist");
    cmd.env("KELIST_DIR", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("KELIST_API_URL")
        .env_remove("KELIST_LOG");
    cmd
}

/// A data directory holding one board with the given title.
pub fn with_board(title: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    kelist(&temp).args(["board", "new", title]).assert().success();
    temp
}

/// Path of the local snapshot.
pub fn snapshot_path(temp: &TempDir) -> PathBuf {
    temp.path().join("kelist-boards.json")
}

/// The local snapshot as JSON.
pub fn snapshot(temp: &TempDir) -> serde_json::Value {
    let text = std::fs::read_to_string(snapshot_path(temp)).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Write a `[remote]` config pointing at `url` with fast retries.
pub fn configure_remote(temp: &TempDir, url: &str) {
    let config = format!(
        "[remote]\nurl = \"{}\"\nretry_attempts = 2\nretry_delay_ms = 10\ntimeout_ms = 2000\n",
        url
    );
    std::fs::write(temp.path().join("config.toml"), config).unwrap();
}

#[derive(Default)]
struct ServerState {
    boards: String,
    syncs: usize,
    backups: usize,
}

/// In-process stand-in for a kelist server.
///
/// Serves `/api/health`, `/api/boards` (GET and POST), `/api/backup` and
/// `/api/sync-info` with one thread per connection.
#[derive(Clone)]
pub struct FakeServer {
    pub url: String,
    state: Arc<Mutex<ServerState>>,
}

impl FakeServer {
    pub fn start(boards: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        let state = Arc::new(Mutex::new(ServerState {
            boards: boards.to_string(),
            ..ServerState::default()
        }));
        let shared = Arc::clone(&state);
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let state = Arc::clone(&shared);
                std::thread::spawn(move || handle(stream, &state));
            }
        });
        FakeServer { url, state }
    }

    pub fn boards(&self) -> serde_json::Value {
        serde_json::from_str(&self.state.lock().unwrap().boards).unwrap()
    }

    pub fn syncs(&self) -> usize {
        self.state.lock().unwrap().syncs
    }

    pub fn backups(&self) -> usize {
        self.state.lock().unwrap().backups
    }
}

/// A URL nothing listens on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api", listener.local_addr().unwrap());
    drop(listener);
    url
}

fn handle(mut stream: TcpStream, state: &Mutex<ServerState>) {
    let (head, body) = read_request(&mut stream);
    let line = head.lines().next().unwrap_or_default().to_string();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();
    let stamp = "2026-01-01T00:00:00.000Z";

    let (status, reply) = {
        let mut state = state.lock().unwrap();
        match (method, path) {
            ("GET", "/api/health") => ("200 OK", format!(r#"{{"status":"ok","timestamp":"{stamp}"}}"#)),
            ("GET", "/api/boards") => ("200 OK", state.boards.clone()),
            ("POST", "/api/boards") => {
                state.boards = body;
                state.syncs += 1;
                (
                    "200 OK",
                    format!(r#"{{"success":true,"syncId":"sync-{}","timestamp":"{stamp}"}}"#, state.syncs),
                )
            }
            ("POST", "/api/backup") => {
                state.backups += 1;
                ("200 OK", format!(r#"{{"success":true,"backupFile":"backup-{}.json"}}"#, state.backups))
            }
            ("GET", "/api/sync-info") if state.syncs == 0 => {
                ("200 OK", r#"{"lastSync":null,"syncId":null}"#.to_string())
            }
            ("GET", "/api/sync-info") => (
                "200 OK",
                format!(r#"{{"lastSync":"{stamp}","syncId":"sync-{}"}}"#, state.syncs),
            ),
            _ => ("404 Not Found", r#"{"error":"not found"}"#.to_string()),
        }
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reply.len(),
        reply
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> (String, String) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                let head = text[..end].to_string();
                let body = String::from_utf8_lossy(&buf[end + 4..end + 4 + length]).to_string();
                return (head, body);
            }
        }
    }
    (String::from_utf8_lossy(&buf).to_string(), String::new())
}

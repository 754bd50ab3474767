// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use tempfile::TempDir;

use crate::board::Item;

fn board(id: &str, title: &str) -> Board {
    let mut board = Board::new(id.into(), title.into(), Utc::now());
    board.items.push(Item::new(format!("{id}1"), "first".into(), None, Utc::now()));
    board
}

#[test]
fn load_returns_empty_on_first_run() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path());
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_returns_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path());
    let boards = vec![board("1", "Groceries"), board("2", "Work")];

    store.save(&boards).unwrap();

    assert_eq!(store.load(), boards);
}

#[test]
fn save_overwrites_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path());

    store.save(&[board("1", "Groceries"), board("2", "Work")]).unwrap();
    store.save(&[board("3", "Travel")]).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Travel");
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(&dir.path().join("nested").join("data"));

    store.save(&[board("1", "Groceries")]).unwrap();

    assert!(store.path().exists());
}

#[test]
fn corrupted_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ definitely not boards").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn wrong_shape_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"boards": []}"#).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn memory_store_roundtrips_through_json() {
    let store = MemoryStore::new();
    assert!(store.load().is_empty());

    store.save(&[board("1", "Groceries")]).unwrap();

    assert!(store.snapshot().unwrap().contains("\"createdAt\""));
    assert_eq!(store.load()[0].title, "Groceries");
}

#[test]
fn memory_store_with_garbage_loads_as_empty() {
    let store = MemoryStore::with_json("garbage");
    assert!(store.load().is_empty());
}

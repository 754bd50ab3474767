// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn boards_empty_data_dir() {
    let temp = TempDir::new().unwrap();

    kelist(&temp)
        .arg("boards")
        .assert()
        .success()
        .stdout(predicate::str::contains("No boards"));
    assert!(!snapshot_path(&temp).exists());
}

#[test]
fn new_board_is_listed_and_saved() {
    let temp = with_board("Groceries");

    kelist(&temp)
        .args(["board", "new", "Hardware"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created board Hardware"));

    kelist(&temp)
        .arg("boards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Hardware"));

    let boards = snapshot(&temp);
    assert_eq!(boards.as_array().unwrap().len(), 2);
    assert_eq!(boards[1]["title"], "Hardware");
    assert!(boards[1]["createdAt"].is_string());
    assert!(boards[1]["updatedAt"].is_string());
}

#[test]
fn first_board_is_selected_by_default() {
    let temp = with_board("One");
    kelist(&temp).args(["board", "new", "Two"]).assert().success();

    kelist(&temp)
        .arg("boards")
        .assert()
        .success()
        .stdout(predicate::str::contains("* One"));
}

#[test]
fn board_flag_selects_by_title_prefix() {
    let temp = with_board("Groceries");
    kelist(&temp).args(["board", "new", "Hardware"]).assert().success();

    kelist(&temp)
        .args(["-b", "hard", "add", "Screws"])
        .assert()
        .success();

    let boards = snapshot(&temp);
    assert_eq!(boards[0]["items"].as_array().unwrap().len(), 0);
    assert_eq!(boards[1]["items"][0]["text"], "Screws");
}

#[test]
fn unknown_board_fails() {
    let temp = with_board("Groceries");

    kelist(&temp)
        .args(["-b", "nope", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board not found: nope"));
}

#[test]
fn rename_and_delete() {
    let temp = with_board("Groceries");
    kelist(&temp).args(["board", "new", "Temp"]).assert().success();

    kelist(&temp)
        .args(["-b", "groceries", "board", "rename", "Weekly shop"])
        .assert()
        .success();
    kelist(&temp)
        .args(["-b", "temp", "board", "delete"])
        .assert()
        .success();

    let boards = snapshot(&temp);
    assert_eq!(boards.as_array().unwrap().len(), 1);
    assert_eq!(boards[0]["title"], "Weekly shop");
}

#[test]
fn empty_title_is_rejected() {
    let temp = TempDir::new().unwrap();

    kelist(&temp).args(["board", "new", "  "]).assert().failure();
    assert!(!snapshot_path(&temp).exists());
}

#[test]
fn item_commands_need_a_board() {
    let temp = TempDir::new().unwrap();

    kelist(&temp)
        .args(["add", "Milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no boards yet"));
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(snapshot_path(&temp), "{not json").unwrap();

    kelist(&temp)
        .arg("boards")
        .assert()
        .success()
        .stdout(predicate::str::contains("No boards"));
}

#[test]
fn legacy_snapshot_is_upgraded() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        snapshot_path(&temp),
        r#"[{"id":"1","title":"Old","items":[{"id":"2","text":"Milk","completed":false,"createdAt":"2025-01-01T00:00:00Z"}],"createdAt":"2025-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    kelist(&temp)
        .args(["category", "add", "Dairy"])
        .assert()
        .success();

    let boards = snapshot(&temp);
    assert_eq!(boards[0]["categories"][0]["name"], "Dairy");
    assert_eq!(boards[0]["items"][0]["text"], "Milk");
}

#[test]
fn completion_generates_script() {
    let temp = TempDir::new().unwrap();

    kelist(&temp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kelist"));
}

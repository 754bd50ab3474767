// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display::format_board_line;
use crate::error::{Error, Result};
use crate::session::Session;

use super::current_board;

pub fn list(session: &Session) -> Result<()> {
    if session.boards().is_empty() {
        println!("No boards. Create one with 'kelist board new <title>'.");
        return Ok(());
    }
    let current = session.state().current_board_id();
    for board in session.boards() {
        println!("{}", format_board_line(board, current == Some(board.id.as_str())));
    }
    Ok(())
}

pub fn new(session: &mut Session, title: &str) -> Result<()> {
    let id = session
        .create_board(title)
        .ok_or_else(|| Error::Config("board title cannot be empty".to_string()))?;
    println!("Created board {} ({})", title.trim(), id);
    Ok(())
}

pub fn rename(session: &mut Session, title: &str) -> Result<()> {
    let board = current_board(session)?;
    let (id, old) = (board.id.clone(), board.title.clone());
    if session.rename_board(&id, title) {
        println!("Renamed board {} to {}", old, title.trim());
    } else {
        println!("Board is already named {}", old);
    }
    Ok(())
}

pub fn delete(session: &mut Session) -> Result<()> {
    let board = current_board(session)?;
    let (id, title) = (board.id.clone(), board.title.clone());
    session.delete_board(&id);
    println!("Deleted board {}", title);
    Ok(())
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;

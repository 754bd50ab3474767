// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::Result;
use crate::session::Session;

use super::{current_board, resolve};

pub fn add(session: &mut Session, name: &str, color: Option<&str>) -> Result<()> {
    current_board(session)?;
    if let Some(id) = session.add_category(name, color) {
        println!("Added category {} ({})", name.trim(), id);
    }
    Ok(())
}

pub fn edit(session: &mut Session, query: &str, name: &str, color: Option<&str>) -> Result<()> {
    let id = resolve::category(current_board(session)?, query)?.id.clone();
    if session.edit_category(&id, name, color) {
        println!("Updated category {}", name.trim());
    } else {
        println!("Unchanged");
    }
    Ok(())
}

/// Delete a category. Its items stay on the board, uncategorized.
pub fn remove(session: &mut Session, query: &str) -> Result<()> {
    let board = current_board(session)?;
    let category = resolve::category(board, query)?;
    let (id, name) = (category.id.clone(), category.name.clone());
    let orphaned = board.items_in(Some(id.as_str())).count();
    session.delete_category(&id);
    match orphaned {
        0 => println!("Deleted category {}", name),
        n => println!("Deleted category {} ({} item(s) now uncategorized)", name, n),
    }
    Ok(())
}

pub fn up(session: &mut Session, query: &str) -> Result<()> {
    let id = resolve::category(current_board(session)?, query)?.id.clone();
    if !session.move_category_up(&id) {
        println!("Already first");
    }
    Ok(())
}

pub fn down(session: &mut Session, query: &str) -> Result<()> {
    let id = resolve::category(current_board(session)?, query)?.id.clone();
    if !session.move_category_down(&id) {
        println!("Already last");
    }
    Ok(())
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;

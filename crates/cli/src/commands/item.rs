// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::{CategoryTarget, DropTarget};
use crate::error::Result;
use crate::session::Session;

use super::{current_board, resolve};

pub fn add(session: &mut Session, text: &str, category: Option<&str>) -> Result<()> {
    let board = current_board(session)?;
    let category_id = category
        .map(|query| resolve::category(board, query).map(|c| c.id.clone()))
        .transpose()?;
    if let Some(id) = session.add_item(text, category_id.as_deref()) {
        println!("Added {} ({})", text.trim(), id);
    }
    Ok(())
}

pub fn edit(session: &mut Session, query: &str, text: &str) -> Result<()> {
    let id = resolve::item(current_board(session)?, query)?.id.clone();
    if session.edit_item(&id, text) {
        println!("Updated {}", text.trim());
    } else {
        println!("Unchanged");
    }
    Ok(())
}

/// Flip completion of each item. References are resolved before anything
/// changes.
pub fn toggle(session: &mut Session, queries: &[String]) -> Result<()> {
    let ids = resolve::item_ids(current_board(session)?, queries)?;
    for id in ids {
        session.toggle_item(&id);
        if let Some(item) = current_board(session)?.item(&id) {
            let mark = if item.completed { "Done" } else { "Not done" };
            println!("{}: {}", mark, item.text);
        }
    }
    Ok(())
}

pub fn remove(session: &mut Session, queries: &[String]) -> Result<()> {
    let board = current_board(session)?;
    let ids = resolve::item_ids(board, queries)?;
    let texts: Vec<String> = ids
        .iter()
        .filter_map(|id| board.item(id).map(|item| item.text.clone()))
        .collect();
    for (id, text) in ids.iter().zip(texts) {
        if session.delete_item(id) {
            println!("Deleted {}", text);
        }
    }
    Ok(())
}

/// Drop `query` before or after the target item. Without an explicit
/// category the item joins the target's category.
pub fn move_item(
    session: &mut Session,
    query: &str,
    target: &DropTarget,
    category: &CategoryTarget,
) -> Result<()> {
    let board = current_board(session)?;
    let dragged = resolve::item(board, query)?.id.clone();
    let Some((target_query, insert_before)) = target.resolve() else {
        return Ok(());
    };
    let target_item = resolve::item(board, target_query)?;
    let target_id = target_item.id.clone();
    let target_category = if category.uncategorized {
        None
    } else if let Some(query) = category.category.as_deref() {
        Some(resolve::category(board, query)?.id.clone())
    } else {
        target_item.category_id.clone()
    };

    if session.reorder_item(&dragged, &target_id, insert_before, target_category.as_deref()) {
        println!("Moved");
    } else {
        println!("Unchanged");
    }
    Ok(())
}

/// Put an item in a category, or take it out of any with `None`.
pub fn categorize(session: &mut Session, query: &str, category: Option<&str>) -> Result<()> {
    let board = current_board(session)?;
    let id = resolve::item(board, query)?.id.clone();
    let category = category
        .map(|q| resolve::category(board, q).map(|c| (c.id.clone(), c.name.clone())))
        .transpose()?;

    let (category_id, name) = match &category {
        Some((category_id, name)) => (Some(category_id.as_str()), name.as_str()),
        None => (None, "Uncategorized"),
    };
    if session.move_item_to_category(&id, category_id) {
        println!("Moved to {}", name);
    } else {
        println!("Already in {}", name);
    }
    Ok(())
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;

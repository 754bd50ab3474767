// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of command-line references to boards, categories and items.
//!
//! A reference matches, in order of preference: an exact id, a
//! case-insensitive exact label, or a unique case-insensitive label prefix.

use kelist_core::{Board, Category, Item};

use crate::error::{Error, Result};

fn find<'a, T>(
    candidates: &'a [T],
    query: &str,
    kind: &'static str,
    id: impl Fn(&T) -> &str,
    label: impl Fn(&T) -> &str,
) -> std::result::Result<&'a T, Option<Error>> {
    if let Some(hit) = candidates.iter().find(|c| id(*c) == query) {
        return Ok(hit);
    }

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(None);
    }
    let exact: Vec<&T> = candidates
        .iter()
        .filter(|c| label(*c).to_lowercase() == needle)
        .collect();
    let matches = if exact.is_empty() {
        candidates
            .iter()
            .filter(|c| label(*c).to_lowercase().starts_with(&needle))
            .collect()
    } else {
        exact
    };

    match matches.as_slice() {
        [] => Err(None),
        [one] => Ok(*one),
        many => Err(Some(Error::Ambiguous {
            kind,
            query: query.to_string(),
            matches: many
                .iter()
                .map(|c| format!("{} ({})", label(*c), id(*c)))
                .collect(),
        })),
    }
}

pub fn board<'a>(boards: &'a [Board], query: &str) -> Result<&'a Board> {
    find(boards, query, "board", |b| b.id.as_str(), |b| b.title.as_str())
        .map_err(|e| e.unwrap_or_else(|| Error::BoardNotFound(query.to_string())))
}

pub fn category<'a>(board: &'a Board, query: &str) -> Result<&'a Category> {
    find(&board.categories, query, "category", |c| c.id.as_str(), |c| c.name.as_str())
        .map_err(|e| e.unwrap_or_else(|| Error::CategoryNotFound(query.to_string())))
}

pub fn item<'a>(board: &'a Board, query: &str) -> Result<&'a Item> {
    find(&board.items, query, "item", |i| i.id.as_str(), |i| i.text.as_str())
        .map_err(|e| e.unwrap_or_else(|| Error::ItemNotFound(query.to_string())))
}

/// Resolve every query to an item id, failing on the first miss.
/// Duplicates are dropped, keeping first-mention order.
pub fn item_ids(board: &Board, queries: &[String]) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::with_capacity(queries.len());
    for query in queries {
        let id = &item(board, query)?.id;
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }
    Ok(ids)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-time upgrade of stored or fetched board collections.
//!
//! Older records predate categories: boards may lack a `categories` array
//! and items may carry `categoryId: null` or point at categories that no
//! longer exist. Every snapshot entering the model passes through
//! [`upgrade`] once, so model operations can rely on the invariants.

use serde_json::Value;

use crate::board::Board;
use crate::error::{Error, Result};

/// Parses a JSON document into an upgraded board collection.
pub fn parse(json: &str) -> Result<Vec<Board>> {
    let value: Value = serde_json::from_str(json)?;
    upgrade(value)
}

/// Upgrades a raw JSON board array into typed, invariant-respecting boards.
pub fn upgrade(value: Value) -> Result<Vec<Board>> {
    let Value::Array(mut raw) = value else {
        return Err(Error::CorruptedData("expected a JSON array of boards".to_string()));
    };

    for board in &mut raw {
        let Value::Object(fields) = board else {
            return Err(Error::CorruptedData("board entry is not an object".to_string()));
        };
        for key in ["items", "categories"] {
            if !matches!(fields.get(key), Some(Value::Array(_))) {
                fields.insert(key.to_string(), Value::Array(Vec::new()));
            }
        }
        if !fields.contains_key("updatedAt") {
            if let Some(created) = fields.get("createdAt").cloned() {
                fields.insert("updatedAt".to_string(), created);
            }
        }
    }

    let mut boards: Vec<Board> = serde_json::from_value(Value::Array(raw))?;
    let cleared = repair_references(&mut boards);
    if cleared > 0 {
        tracing::warn!(cleared, "cleared dangling category references");
    }
    Ok(boards)
}

/// Clears item category references that do not resolve on their board.
///
/// Returns the number of references cleared.
pub fn repair_references(boards: &mut [Board]) -> usize {
    let mut cleared = 0;
    for board in boards.iter_mut() {
        let Board { items, categories, .. } = board;
        for item in items.iter_mut() {
            let dangling = item
                .category_id
                .as_deref()
                .is_some_and(|id| !categories.iter().any(|category| category.id == id));
            if dangling {
                item.category_id = None;
                cleared += 1;
            }
        }
    }
    cleared
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;

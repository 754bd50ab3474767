// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core entity types: Board, Category and Item.
//!
//! Field names serialize in camelCase to match the JSON exchanged with the
//! remote store and written to the local store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color assigned to a category when none is given.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// A named collection of categories and items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique, time-derived identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Canonical item sequence. Order is significant for reordering.
    pub items: Vec<Item>,
    /// User-ordered categories.
    pub categories: Vec<Category>,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of the board's items or categories.
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(id: String, title: String, created_at: DateTime<Utc>) -> Self {
        Board {
            id,
            title,
            items: Vec::new(),
            categories: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Stamps `updated_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Position of an item in the canonical sequence.
    pub fn item_index(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    /// Position of a category in display order.
    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.id == id)
    }

    /// Returns true if `category_id` is absent or names a category on this board.
    pub fn resolves(&self, category_id: Option<&str>) -> bool {
        category_id.is_none_or(|id| self.category(id).is_some())
    }

    /// Items assigned to `category_id` (or uncategorized items for `None`),
    /// in canonical order.
    pub fn items_in<'a>(&'a self, category_id: Option<&'a str>) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.category_id.as_deref() == category_id)
    }
}

/// A named, colored grouping of items within a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: String, name: String, color: String, created_at: DateTime<Utc>) -> Self {
        Category { id, name, color, created_at }
    }
}

/// A single checkable list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Weak reference to a category on the same board. `None` means
    /// uncategorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates an incomplete item.
    pub fn new(
        id: String,
        text: String,
        category_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Item { id, text, completed: false, category_id, created_at }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;

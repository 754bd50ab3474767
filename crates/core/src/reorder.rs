// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence algorithms behind drag-and-drop.
//!
//! These work on a board's raw sequences and know nothing about timestamps
//! or persistence; [`crate::model::State`] wraps them. Each returns `true`
//! only when the sequence actually changed.

use crate::board::Item;

/// Where a dragged item lands relative to its drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    pub fn from_insert_before(insert_before: bool) -> Self {
        if insert_before { Placement::Before } else { Placement::After }
    }
}

/// Moves `dragged_id` next to `target_id` and assigns it `target_category`.
///
/// The target's index is taken after the dragged item is removed, so
/// dropping "before B" always lands immediately before B regardless of
/// which direction the item travelled. No-op if either item is missing or
/// both ids are the same.
pub fn reorder(
    items: &mut Vec<Item>,
    dragged_id: &str,
    target_id: &str,
    placement: Placement,
    target_category: Option<&str>,
) -> bool {
    if dragged_id == target_id {
        return false;
    }
    let Some(from) = items.iter().position(|item| item.id == dragged_id) else {
        return false;
    };
    let Some(target) = items.iter().position(|item| item.id == target_id) else {
        return false;
    };

    let mut item = items.remove(from);
    let category_changed = item.category_id.as_deref() != target_category;
    item.category_id = target_category.map(str::to_string);

    let target = if from < target { target - 1 } else { target };
    let to = match placement {
        Placement::Before => target,
        Placement::After => target + 1,
    };
    items.insert(to, item);

    category_changed || to != from
}

/// Reassigns an item's category without moving it in the sequence.
pub fn move_to_category(items: &mut [Item], item_id: &str, target_category: Option<&str>) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
        return false;
    };
    if item.category_id.as_deref() == target_category {
        return false;
    }
    item.category_id = target_category.map(str::to_string);
    true
}

/// Swaps the entry at `index` with its predecessor. No-op at the front.
pub fn move_up<T>(seq: &mut [T], index: usize) -> bool {
    if index == 0 || index >= seq.len() {
        return false;
    }
    seq.swap(index - 1, index);
    true
}

/// Swaps the entry at `index` with its successor. No-op at the back.
pub fn move_down<T>(seq: &mut [T], index: usize) -> bool {
    if index + 1 >= seq.len() {
        return false;
    }
    seq.swap(index, index + 1);
    true
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;

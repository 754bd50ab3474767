// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views over a board for presentation layers.
//!
//! Views never reorder the canonical item sequence. Within any view,
//! incomplete items come before completed ones and each half keeps its
//! canonical relative order (a stable partition, not a sort).

use crate::board::{Board, Category, Item};

/// Stable partition: incomplete items first, then completed ones.
pub fn by_completion<'a, I>(items: I) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let (open, done): (Vec<&Item>, Vec<&Item>) =
        items.into_iter().partition(|item| !item.completed);
    open.into_iter().chain(done).collect()
}

/// One display group: a category (or the uncategorized bucket) and its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    /// `None` for uncategorized items.
    pub category: Option<&'a Category>,
    pub items: Vec<&'a Item>,
}

impl Group<'_> {
    /// Display name of the group.
    pub fn name(&self) -> &str {
        self.category.map_or("Uncategorized", |category| category.name.as_str())
    }
}

/// Groups a board's items by category, in category order.
///
/// Every category gets a group, even when empty, so it can still be used as
/// a drop target. Uncategorized items follow in a trailing group that only
/// appears when non-empty.
pub fn groups(board: &Board) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = board
        .categories
        .iter()
        .map(|category| Group {
            category: Some(category),
            items: by_completion(board.items_in(Some(category.id.as_str()))),
        })
        .collect();

    let loose = by_completion(board.items_in(None));
    if !loose.is_empty() {
        groups.push(Group { category: None, items: loose });
    }
    groups
}

/// Completed and total item counts for a board.
pub fn progress(board: &Board) -> (usize, usize) {
    let done = board.items.iter().filter(|item| item.completed).count();
    (done, board.items.len())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The in-memory board collection and every operation that mutates it.
//!
//! [`State`] is an explicit value owned by whoever composes the
//! application; nothing here is global. Operations follow one contract:
//!
//! - required text is trimmed, and empty text makes the call a no-op
//! - missing boards, categories or items make the call a no-op
//! - a call that would not change anything is a no-op
//! - a call that changes a board's items or categories stamps its `updated_at`
//!
//! Every method reports whether it changed the state (`true`, or `Some(id)`
//! for creations) so the caller knows when to persist and sync. Category
//! and item operations act on the current board.

use chrono::{DateTime, Utc};

use crate::board::{Board, Category, Item, DEFAULT_CATEGORY_COLOR};
use crate::clock::{ClockSource, SystemClock};
use crate::id::IdGenerator;
use crate::reorder::{self, Placement};

/// The board collection plus the current-board selection.
#[derive(Debug)]
pub struct State<C: ClockSource = SystemClock> {
    boards: Vec<Board>,
    current: Option<String>,
    ids: IdGenerator,
    clock: C,
}

impl State<SystemClock> {
    /// Creates an empty state on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for State<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trims `text` and rejects it if nothing is left.
fn required(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn color_or_default(color: Option<&str>) -> &str {
    color.and_then(required).unwrap_or(DEFAULT_CATEGORY_COLOR)
}

impl<C: ClockSource> State<C> {
    /// Creates an empty state reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        State { boards: Vec::new(), current: None, ids: IdGenerator::new(), clock }
    }

    /// Replaces the whole collection with a loaded or fetched snapshot.
    ///
    /// The current board survives if the snapshot still contains it;
    /// otherwise the first board becomes current.
    pub fn replace_all(&mut self, boards: Vec<Board>) {
        self.ids.observe(&boards);
        self.boards = boards;
        let keep = self.current.as_deref().is_some_and(|id| self.board(id).is_some());
        if !keep {
            self.current = self.boards.first().map(|board| board.id.clone());
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    pub fn current_board_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.current.as_deref().and_then(|id| self.board(id))
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Runs `op` against the current board and stamps it if `op` changed it.
    fn mutate_current<R>(
        &mut self,
        op: impl FnOnce(&mut Board, &mut IdGenerator, u64, DateTime<Utc>) -> Option<R>,
    ) -> Option<R> {
        let now_ms = self.clock.now_ms();
        let now = self.clock.now();
        let current = self.current.as_deref()?;
        let Some(board) = self.boards.iter_mut().find(|board| board.id == current) else {
            tracing::debug!(board = current, "current board is gone");
            return None;
        };
        let result = op(board, &mut self.ids, now_ms, now)?;
        board.touch(now);
        Some(result)
    }

    // Boards

    /// Creates a board, appends it and makes it current.
    pub fn create_board(&mut self, title: &str) -> Option<String> {
        let title = required(title)?;
        let id = self.ids.next(self.clock.now_ms());
        self.boards.push(Board::new(id.clone(), title.to_string(), self.now()));
        self.current = Some(id.clone());
        Some(id)
    }

    pub fn rename_board(&mut self, board_id: &str, title: &str) -> bool {
        let Some(title) = required(title) else {
            return false;
        };
        let now = self.now();
        let Some(board) = self.boards.iter_mut().find(|board| board.id == board_id) else {
            return false;
        };
        if board.title == title {
            return false;
        }
        board.title = title.to_string();
        board.touch(now);
        true
    }

    /// Deletes a board with all its items and categories.
    ///
    /// If it was current, the first remaining board becomes current (or none).
    pub fn delete_board(&mut self, board_id: &str) -> bool {
        let Some(index) = self.boards.iter().position(|board| board.id == board_id) else {
            return false;
        };
        self.boards.remove(index);
        if self.current.as_deref() == Some(board_id) {
            self.current = self.boards.first().map(|board| board.id.clone());
        }
        true
    }

    /// Selects the current board. Touches nothing persistent.
    pub fn switch_board(&mut self, board_id: &str) -> bool {
        if self.current.as_deref() == Some(board_id) || self.board(board_id).is_none() {
            return false;
        }
        self.current = Some(board_id.to_string());
        true
    }

    // Categories

    /// Appends a category to the current board.
    pub fn add_category(&mut self, name: &str, color: Option<&str>) -> Option<String> {
        let name = required(name)?;
        let color = color_or_default(color).to_string();
        self.mutate_current(|board, ids, now_ms, now| {
            let id = ids.next(now_ms);
            board.categories.push(Category::new(id.clone(), name.to_string(), color, now));
            Some(id)
        })
    }

    /// Renames a category and, when `color` is given, recolors it.
    pub fn edit_category(&mut self, category_id: &str, name: &str, color: Option<&str>) -> bool {
        let Some(name) = required(name) else {
            return false;
        };
        let color = color.and_then(required);
        self.mutate_current(|board, _, _, _| {
            let category = board.category_mut(category_id)?;
            let color = color.unwrap_or(category.color.as_str()).to_string();
            if category.name == name && category.color == color {
                return None;
            }
            category.name = name.to_string();
            category.color = color;
            Some(())
        })
        .is_some()
    }

    /// Removes a category and clears it from every item that referenced it.
    ///
    /// Items are kept; they become uncategorized.
    pub fn delete_category(&mut self, category_id: &str) -> bool {
        self.mutate_current(|board, _, _, _| {
            let index = board.category_index(category_id)?;
            board.categories.remove(index);
            for item in &mut board.items {
                if item.category_id.as_deref() == Some(category_id) {
                    item.category_id = None;
                }
            }
            Some(())
        })
        .is_some()
    }

    pub fn move_category_up(&mut self, category_id: &str) -> bool {
        self.mutate_current(|board, _, _, _| {
            let index = board.category_index(category_id)?;
            reorder::move_up(&mut board.categories, index).then_some(())
        })
        .is_some()
    }

    pub fn move_category_down(&mut self, category_id: &str) -> bool {
        self.mutate_current(|board, _, _, _| {
            let index = board.category_index(category_id)?;
            reorder::move_down(&mut board.categories, index).then_some(())
        })
        .is_some()
    }

    // Items

    /// Appends an item to the current board.
    ///
    /// `category_id` must name a category on the board, or be `None`.
    pub fn add_item(&mut self, text: &str, category_id: Option<&str>) -> Option<String> {
        let text = required(text)?;
        self.mutate_current(|board, ids, now_ms, now| {
            if !board.resolves(category_id) {
                return None;
            }
            let id = ids.next(now_ms);
            let category_id = category_id.map(str::to_string);
            board.items.push(Item::new(id.clone(), text.to_string(), category_id, now));
            Some(id)
        })
    }

    pub fn edit_item(&mut self, item_id: &str, text: &str) -> bool {
        let Some(text) = required(text) else {
            return false;
        };
        self.mutate_current(|board, _, _, _| {
            let item = board.item_mut(item_id)?;
            if item.text == text {
                return None;
            }
            item.text = text.to_string();
            Some(())
        })
        .is_some()
    }

    pub fn toggle_item(&mut self, item_id: &str) -> bool {
        self.mutate_current(|board, _, _, _| {
            let item = board.item_mut(item_id)?;
            item.completed = !item.completed;
            Some(())
        })
        .is_some()
    }

    pub fn delete_item(&mut self, item_id: &str) -> bool {
        self.mutate_current(|board, _, _, _| {
            let index = board.item_index(item_id)?;
            board.items.remove(index);
            Some(())
        })
        .is_some()
    }

    /// Reassigns an item's category without moving it in the sequence.
    ///
    /// Used when dropping into a category that has no item to anchor to.
    pub fn move_item_to_category(&mut self, item_id: &str, target_category: Option<&str>) -> bool {
        self.mutate_current(|board, _, _, _| {
            if !board.resolves(target_category) {
                return None;
            }
            reorder::move_to_category(&mut board.items, item_id, target_category).then_some(())
        })
        .is_some()
    }

    /// Drops `dragged_id` immediately before or after `target_id` and
    /// assigns it `target_category`.
    pub fn reorder_item(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        insert_before: bool,
        target_category: Option<&str>,
    ) -> bool {
        let placement = Placement::from_insert_before(insert_before);
        self.mutate_current(|board, _, _, _| {
            if !board.resolves(target_category) {
                return None;
            }
            reorder::reorder(&mut board.items, dragged_id, target_id, placement, target_category)
                .then_some(())
        })
        .is_some()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

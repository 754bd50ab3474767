// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-derived entity ids.
//!
//! Ids are the decimal wall clock reading in milliseconds at creation. The
//! generator never hands out the same id twice: when the clock has not moved
//! past the last id (same millisecond, or clock skew) it bumps by one.
//! Once the numeric range is exhausted (an observed id of `u64::MAX`), ids
//! continue as `<u64::MAX>-<n>`, which never parse as numbers.

use crate::board::Board;

/// Generates strictly increasing millisecond ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
    overflow: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id given the current clock reading.
    pub fn next(&mut self, now_ms: u64) -> String {
        let id = if now_ms > self.last {
            now_ms
        } else {
            match self.last.checked_add(1) {
                Some(id) => id,
                None => {
                    self.overflow = self.overflow.saturating_add(1);
                    return format!("{}-{}", u64::MAX, self.overflow);
                }
            }
        };
        self.last = id;
        id.to_string()
    }

    /// Raises the floor above every numeric id already present in `boards`.
    ///
    /// Ids that are not decimal numbers (hand-edited or foreign data) are
    /// ignored; they cannot collide with generated ids.
    pub fn observe(&mut self, boards: &[Board]) {
        let ids = boards.iter().flat_map(|board| {
            std::iter::once(board.id.as_str())
                .chain(board.items.iter().map(|item| item.id.as_str()))
                .chain(board.categories.iter().map(|category| category.id.as_str()))
        });
        for id in ids {
            if let Ok(n) = id.parse::<u64>() {
                self.last = self.last.max(n);
            }
        }
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

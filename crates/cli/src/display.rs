// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of boards and sync status.

use kelist_core::display::{groups, progress};
use kelist_core::{Board, Item};

use crate::colors;
use crate::sync::SyncStatus;

/// One line in the board list. The selected board is marked with `*`.
pub fn format_board_line(board: &Board, selected: bool) -> String {
    let (done, total) = progress(board);
    format!(
        "{} {}  {}  {}",
        if selected { "*" } else { " " },
        colors::header(&board.title),
        colors::context(&format!("{done}/{total}")),
        colors::context(&format!("({})", board.id)),
    )
}

pub fn format_item_line(item: &Item) -> String {
    if item.completed {
        format!(
            "  {} {}  {}",
            colors::done("[x]"),
            colors::done(&item.text),
            colors::context(&format!("({})", item.id))
        )
    } else {
        format!("  [ ] {}  {}", item.text, colors::context(&format!("({})", item.id)))
    }
}

/// The whole board: title with progress, then each group with its items.
///
/// Empty categories are listed so they can be seen as move targets.
pub fn format_board(board: &Board) -> String {
    let (done, total) = progress(board);
    let mut out = format!(
        "{} {}\n",
        colors::header(&board.title),
        colors::context(&format!("({done}/{total} done)"))
    );
    if board.items.is_empty() && board.categories.is_empty() {
        out.push_str(&colors::context("\n  (empty)\n"));
        return out;
    }
    for group in groups(board) {
        out.push('\n');
        let swatch = group.category.map(|c| colors::swatch(&c.color)).unwrap_or_default();
        out.push_str(&format!("{}{}\n", swatch, colors::literal(group.name())));
        if group.items.is_empty() {
            out.push_str(&format!("  {}\n", colors::context("(no items)")));
        }
        for item in group.items {
            out.push_str(&format_item_line(item));
            out.push('\n');
        }
    }
    out
}

/// One-line status for a sync notice.
pub fn format_sync_status(status: &SyncStatus) -> String {
    match status {
        SyncStatus::Synced { sync_id } => format!("synced ({})", sync_id),
        SyncStatus::Retrying { attempt, delay } => format!(
            "sync attempt {} failed, retrying in {:.1}s",
            attempt,
            delay.as_secs_f64()
        ),
        SyncStatus::Offline => "sync failed, working offline (changes are saved locally)".to_string(),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

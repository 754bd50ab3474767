// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

/// Where a moved item lands relative to another item.
#[derive(Args, Clone, Debug, Default)]
#[group(required = true, multiple = false)]
pub struct DropTarget {
    /// Place the item right before this one
    #[arg(long, value_name = "ITEM")]
    pub before: Option<String>,

    /// Place the item right after this one
    #[arg(long, value_name = "ITEM")]
    pub after: Option<String>,
}

impl DropTarget {
    /// The target item query and whether to insert before it.
    pub fn resolve(&self) -> Option<(&str, bool)> {
        match (&self.before, &self.after) {
            (Some(target), _) => Some((target.as_str(), true)),
            (None, Some(target)) => Some((target.as_str(), false)),
            (None, None) => None,
        }
    }
}

/// Optional category override for a moved item.
#[derive(Args, Clone, Debug, Default)]
pub struct CategoryTarget {
    /// Category to move into (id, name or name prefix)
    #[arg(long, short, conflicts_with = "uncategorized")]
    pub category: Option<String>,

    /// Leave the item without a category
    #[arg(long)]
    pub uncategorized: bool,
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{CategoryTarget, DropTarget};

fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn hex_color(s: &str) -> Result<String, String> {
    match colors::parse_hex(s.trim()) {
        Some(_) => Ok(s.trim().to_string()),
        None => Err("expected a color like #6b7280".to_string()),
    }
}

#[derive(Parser)]
#[command(name = "kelist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Boards of categorized checklists, kept in sync with a kelist server")]
#[command(
    long_about = "Boards of categorized checklists.\n\n\
    Every change is saved locally first and then pushed to the configured server. \
    Without a server, kelist works entirely offline."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Board to act on (id, title or title prefix); defaults to the first board
    #[arg(short = 'b', long = "board", global = true, value_name = "BOARD")]
    pub board: Option<String>,

    /// Skip the server for this invocation
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Boards
    // ─────────────────────────────────────────────────────────────────────────
    /// List boards
    Boards,

    /// Create, rename or delete a board
    #[command(subcommand)]
    Board(BoardCommand),

    /// Show the board grouped by category
    #[command(after_help = colors::examples("\
Examples:
  kelist show                    Show the first board
  kelist show -b groceries       Show the board titled Groceries"))]
    Show,

    // ─────────────────────────────────────────────────────────────────────────
    // Items
    // ─────────────────────────────────────────────────────────────────────────
    /// Add an item
    #[command(after_help = colors::examples("\
Examples:
  kelist add \"Milk\"                 Add an uncategorized item
  kelist add \"Apples\" -c produce    Add an item to the Produce category"))]
    Add {
        /// Item text
        #[arg(value_parser = non_empty_string)]
        text: String,

        /// Category (id, name or name prefix)
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Change an item's text
    #[command(arg_required_else_help = true)]
    Edit {
        /// Item (id, text or text prefix)
        item: String,

        /// New text
        #[arg(value_parser = non_empty_string)]
        text: String,
    },

    /// Mark item(s) done or not done
    #[command(arg_required_else_help = true, visible_alias = "done")]
    Toggle {
        /// Item(s) (id, text or text prefix)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Delete item(s)
    #[command(arg_required_else_help = true)]
    Rm {
        /// Item(s) (id, text or text prefix)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Move an item before or after another
    ///
    /// The moved item joins the target's category unless a category is given.
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kelist mv eggs --before milk              Put eggs right above milk
  kelist mv soap --after bread -c household Move soap below bread into Household
  kelist mv apples --before milk --uncategorized")
    )]
    Mv {
        /// Item to move (id, text or text prefix)
        item: String,

        #[command(flatten)]
        target: DropTarget,

        #[command(flatten)]
        category: CategoryTarget,
    },

    /// Put an item in a category (or none)
    #[command(arg_required_else_help = true)]
    Categorize {
        /// Item (id, text or text prefix)
        item: String,

        /// Category (id, name or name prefix); omit to uncategorize
        category: Option<String>,
    },

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Sync & Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Push all boards to the server now
    Sync,

    /// Show the server's last sync
    SyncInfo,

    /// Ask the server to back up its data
    Backup,

    /// Check the server
    Health,

    /// Configure the server URL
    #[command(subcommand)]
    Remote(RemoteCommand),

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  kelist completion bash > ~/.local/share/bash-completion/completions/kelist
  kelist completion zsh > ~/.zfunc/_kelist"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Board management commands.
#[derive(Subcommand)]
pub enum BoardCommand {
    /// Create a board and switch to it
    New {
        #[arg(value_parser = non_empty_string)]
        title: String,
    },

    /// Rename the selected board
    Rename {
        #[arg(value_parser = non_empty_string)]
        title: String,
    },

    /// Delete the selected board with all its items and categories
    Delete,
}

/// Category management commands.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Add a category
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Color as #rrggbb (default: #6b7280)
        #[arg(long, value_parser = hex_color)]
        color: Option<String>,
    },

    /// Rename or recolor a category
    Edit {
        /// Category (id, name or name prefix)
        category: String,

        /// New name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// New color as #rrggbb
        #[arg(long, value_parser = hex_color)]
        color: Option<String>,
    },

    /// Delete a category; its items become uncategorized
    Rm {
        /// Category (id, name or name prefix)
        category: String,
    },

    /// Move a category one place up
    Up {
        /// Category (id, name or name prefix)
        category: String,
    },

    /// Move a category one place down
    Down {
        /// Category (id, name or name prefix)
        category: String,
    },
}

/// Remote configuration commands.
#[derive(Subcommand)]
pub enum RemoteCommand {
    /// Show the configured server
    Show,

    /// Set the server API URL (e.g. http://localhost:3000/api)
    Set {
        url: String,
    },

    /// Remove the server and work local-only
    Unset,
}

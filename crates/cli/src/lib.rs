// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kelist - boards of categorized checklists with remote sync.
//!
//! This crate provides the `kelist` CLI on top of [`kelist_core`]: a
//! reconciliation [`Session`] that saves every change locally and pushes
//! whole snapshots to a kelist server with retry and backoff.
//!
//! # Main Components
//!
//! - [`Session`] - board state plus persistence and background sync
//! - [`sync`] - HTTP transport, retrying [`SyncClient`](sync::SyncClient)
//! - [`Config`] - optional remote settings from `config.toml`
//! - [`notify`] - change and sync-status notices for views
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use kelist::sync::{SyncClient, SyncConfig};
//! use kelist::notify::Notifier;
//! use kelist::Session;
//! use kelist_core::{FileStore, State};
//!
//! let notifier = Notifier::new();
//! let remote = SyncClient::new(SyncConfig::default(), "http://localhost:3000/api", notifier.clone())?;
//! let mut session = Session::new(State::new(), Box::new(FileStore::in_dir(dir)), Some(remote), notifier);
//! session.load().await;
//! session.create_board("Groceries");
//! session.settle().await;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;

pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod sync;

pub use cli::{BoardCommand, CategoryCommand, CategoryTarget, Cli, Command, DropTarget, RemoteCommand};
pub use config::Config;
pub use env::log_filter;
pub use error::{Error, Result};
pub use session::Session;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        board,
        offline,
        command,
    } = cli;

    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "kelist", &mut std::io::stdout());
            Ok(())
        }
        Command::Remote(cmd) => commands::remote::run(cmd),
        command => {
            let mut session = commands::open_session(offline).await?;
            let mut notices = session.notifier().subscribe();
            if let Some(query) = board.as_deref() {
                commands::select_board(&mut session, query)?;
            }
            let result = dispatch(&mut session, command).await;
            commands::finish(&mut session, &mut notices).await;
            result
        }
    }
}

async fn dispatch(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::Boards => commands::board::list(session),
        Command::Board(BoardCommand::New { title }) => commands::board::new(session, &title),
        Command::Board(BoardCommand::Rename { title }) => commands::board::rename(session, &title),
        Command::Board(BoardCommand::Delete) => commands::board::delete(session),
        Command::Show => commands::show::run(session),
        Command::Add { text, category } => {
            commands::item::add(session, &text, category.as_deref())
        }
        Command::Edit { item, text } => commands::item::edit(session, &item, &text),
        Command::Toggle { items } => commands::item::toggle(session, &items),
        Command::Rm { items } => commands::item::remove(session, &items),
        Command::Mv {
            item,
            target,
            category,
        } => commands::item::move_item(session, &item, &target, &category),
        Command::Categorize { item, category } => {
            commands::item::categorize(session, &item, category.as_deref())
        }
        Command::Category(cmd) => match cmd {
            CategoryCommand::Add { name, color } => {
                commands::category::add(session, &name, color.as_deref())
            }
            CategoryCommand::Edit {
                category,
                name,
                color,
            } => commands::category::edit(session, &category, &name, color.as_deref()),
            CategoryCommand::Rm { category } => commands::category::remove(session, &category),
            CategoryCommand::Up { category } => commands::category::up(session, &category),
            CategoryCommand::Down { category } => commands::category::down(session, &category),
        },
        Command::Sync => commands::remote::sync(session).await,
        Command::SyncInfo => commands::remote::sync_info(session).await,
        Command::Backup => commands::remote::backup(session).await,
        Command::Health => commands::remote::health(session).await,
        // Handled before a session is opened.
        Command::Remote(_) | Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit server commands and remote configuration.

use std::path::Path;

use crate::cli::RemoteCommand;
use crate::config::{self, Config, RemoteConfig};
use crate::error::{Error, Result};
use crate::session::Session;

fn not_configured() -> Error {
    let path = config::data_dir()
        .map(|dir| config::config_path(&dir).display().to_string())
        .unwrap_or_else(|_| "config.toml".to_string());
    Error::RemoteNotConfigured(path)
}

/// Push every board now and wait for the server's acknowledgement.
pub async fn sync(session: &Session) -> Result<()> {
    let ack = session.sync_now().await.ok_or_else(not_configured)??;
    println!("Synced {} board(s) ({})", session.boards().len(), ack.sync_id);
    Ok(())
}

pub async fn sync_info(session: &Session) -> Result<()> {
    let info = session.sync_info().await.ok_or_else(not_configured)??;
    match (info.last_sync, info.sync_id) {
        (Some(when), Some(id)) => println!("Last sync: {} ({})", when, id),
        (Some(when), None) => println!("Last sync: {}", when),
        _ => println!("The server has not been synced yet."),
    }
    Ok(())
}

pub async fn backup(session: &Session) -> Result<()> {
    let ack = session.backup().await.ok_or_else(not_configured)??;
    println!("Backup written: {}", ack.backup_file);
    Ok(())
}

pub async fn health(session: &Session) -> Result<()> {
    let remote = session.remote().ok_or_else(not_configured)?;
    let url = remote.transport().base_url().to_string();
    if remote.health_check().await {
        println!("Server at {} is healthy", url);
        Ok(())
    } else {
        Err(Error::Unreachable(url))
    }
}

/// Remote configuration commands. These edit `config.toml` and never touch
/// the network.
pub fn run(cmd: RemoteCommand) -> Result<()> {
    let data_dir = config::data_dir()?;
    run_impl(&data_dir, cmd)
}

pub(crate) fn run_impl(data_dir: &Path, cmd: RemoteCommand) -> Result<()> {
    let mut config = Config::load(data_dir)?;
    match cmd {
        RemoteCommand::Show => match &config.remote {
            Some(remote) => {
                if let Some(msg) = remote.validate_url() {
                    eprintln!("warning: {}", msg);
                }
                println!("url: {}", remote.url);
                println!("retry_attempts: {}", remote.retry_attempts);
                println!("retry_delay_ms: {}", remote.retry_delay_ms);
                println!("timeout_ms: {}", remote.timeout_ms);
            }
            None => println!("No remote configured (local-only mode)."),
        },
        RemoteCommand::Set { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            let remote = match config.remote.take() {
                Some(existing) => RemoteConfig { url, ..existing },
                None => RemoteConfig::new(url),
            };
            if let Some(msg) = remote.validate_url() {
                return Err(Error::Config(msg));
            }
            println!("Remote set to {}", remote.url);
            config.remote = Some(remote);
            config.save(data_dir)?;
        }
        RemoteCommand::Unset => {
            if config.remote.take().is_some() {
                config.save(data_dir)?;
                println!("Remote removed; working local-only.");
            } else {
                println!("No remote configured.");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration lives in `config.toml` inside the data directory and
//! includes:
//! - `remote`: optional remote store settings. Without it kelist runs in
//!   local-only mode and never touches the network.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::sync::SyncConfig;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATA_DIR_NAME: &str = "kelist";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote store settings (optional - if absent, runs in local-only mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

/// Remote store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// API base URL, e.g. `http://localhost:3000/api`.
    pub url: String,
    /// Push attempts before sync is marked disabled (default: 3).
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Base retry delay in milliseconds; attempt `n` waits `n` times this (default: 2000).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Per-request timeout in milliseconds (default: 10000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2_000
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl RemoteConfig {
    /// Creates remote settings for `url` with default retry policy.
    pub fn new(url: impl Into<String>) -> Self {
        RemoteConfig {
            url: url.into(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Validates that the URL is an http(s) URL.
    ///
    /// Returns an error message if the URL is invalid.
    pub fn validate_url(&self) -> Option<String> {
        let rest = self
            .url
            .strip_prefix("http://")
            .or_else(|| self.url.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => None,
            Some(_) => Some(format!("invalid remote URL '{}': missing host", self.url)),
            None => Some(format!("invalid remote URL '{}': must start with http:// or https://", self.url)),
        }
    }

    /// Retry and timeout policy for the sync client.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            max_attempts: self.retry_attempts,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

impl Config {
    /// Loads configuration from the data directory.
    ///
    /// A missing file yields the default (local-only) configuration. The
    /// remote URL is not checked here so `kelist remote` can repair it; see
    /// [`Config::validate`].
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = config_path(data_dir);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        toml::from_str(&content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Checks the remote URL, if any, before it is used for requests.
    pub fn validate(&self) -> Result<()> {
        match self.remote.as_ref().and_then(RemoteConfig::validate_url) {
            Some(msg) => Err(Error::Config(msg)),
            None => Ok(()),
        }
    }

    /// Saves configuration to the data directory, creating it if needed.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(config_path(data_dir), content)?;
        Ok(())
    }

    /// Applies a URL override (from `KELIST_API_URL`), enabling remote mode
    /// with default policy if no remote was configured.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            match self.remote.as_mut() {
                Some(remote) => remote.url = url,
                None => self.remote = Some(RemoteConfig::new(url)),
            }
        }
        self
    }
}

/// Path of the config file inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Resolves the data directory: `KELIST_DIR`, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = crate::env::data_dir() {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::Config("cannot determine data directory; set KELIST_DIR".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

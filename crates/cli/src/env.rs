// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `KELIST_DIR` if set and non-empty.
pub fn data_dir() -> Option<PathBuf> {
    std::env::var(vars::KELIST_DIR).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the value of `KELIST_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    std::env::var(vars::KELIST_API_URL).ok().filter(|v| !v.is_empty())
}

/// Returns the log filter directive from `KELIST_LOG`, defaulting to `warn`.
pub fn log_filter() -> String {
    std::env::var(vars::KELIST_LOG).unwrap_or_else(|_| "warn".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! Configuration module for the project API service
//!
//! Loads configuration from environment variables (optionally seeded from a
//! `.env` file).

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8000";
    pub const USERS_PREFIX: &str = "/api/v1/users";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const USERS_PREFIX: &str = "USERS_PREFIX";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    /// Mount point of the user route table, normalised to `/segment` form
    /// (empty string means the root).
    pub users_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            users_prefix: normalize_prefix(defaults::USERS_PREFIX),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let users_prefix = lookup(env_vars::USERS_PREFIX)
            .map(|raw| normalize_prefix(&raw))
            .unwrap_or_else(|| normalize_prefix(defaults::USERS_PREFIX));

        Config {
            server_addr,
            users_prefix,
        }
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server_addr.parse()?)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.parse::<SocketAddr>().is_err() {
            return Err(AppError::Config(format!(
                "Invalid server address '{}': expected 'host:port'",
                self.server_addr
            )));
        }

        if let Some(c) = self
            .users_prefix
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '{' | '}' | '*'))
        {
            return Err(AppError::Config(format!(
                "Invalid users prefix '{}': unexpected character {:?}",
                self.users_prefix, c
            )));
        }

        let normalized = normalize_prefix(&self.users_prefix);
        if self.users_prefix != normalized {
            return Err(AppError::Config(format!(
                "Invalid users prefix '{}': expected '{}'",
                self.users_prefix, normalized
            )));
        }

        Ok(())
    }
}

/// Normalises a mount prefix: leading slash, no trailing slash, `/` → root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

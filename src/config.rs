// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::models::query::{DEFAULT_LIMIT, MAX_LIMIT};
use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the family API (no trailing slash)
    pub family_api_url: String,
    /// Key sent as `X-API-Key` on every upstream call
    pub family_api_key: String,
    /// Per-request upstream timeout
    pub family_api_timeout: Duration,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// State prefilled in the finder forms
    pub default_state: String,
    /// Result count prefilled in the finder forms
    pub default_limit: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            family_api_url: "http://127.0.0.1:8000".to_string(),
            family_api_key: "demo_pro_key".to_string(),
            family_api_timeout: Duration::from_secs(10),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            default_state: "CA".to_string(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            family_api_url: env::var("FAMILY_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("FAMILY_API_URL"))?,
            family_api_key: env::var("FAMILY_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FAMILY_API_KEY"))?,
            family_api_timeout: Duration::from_secs(
                env::var("FAMILY_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            default_state: env::var("DEFAULT_STATE")
                .map(|v| v.trim().to_ascii_uppercase())
                .unwrap_or_else(|_| "CA".to_string()),
            default_limit: env::var("DEFAULT_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_LIMIT)
                .clamp(1, MAX_LIMIT),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

// ABOUTME: Environment-based server configuration with defaults and validation
// ABOUTME: Reads ports, spreadsheet identifiers, and API secrets from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Environment configuration
//!
//! All configuration comes from environment variables. Required values are
//! the spreadsheet id and its API key; everything else has a sensible
//! default. The text-generation key is optional — without it the advisor
//! runs entirely on its fixed fallbacks.

use std::env;

use tracing::warn;

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::errors::{AppError, AppResult};

/// Default HTTP port for the dashboard API.
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default Google Sheets values API base.
const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Default Generative Language API base.
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text-generation model.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP API listens on (`COURTSIDE_HTTP_PORT`)
    pub http_port: u16,
    /// Base URL of the spreadsheet values API (`COURTSIDE_SHEETS_BASE_URL`)
    pub sheets_base_url: String,
    /// Identifier of the backing spreadsheet (`COURTSIDE_SPREADSHEET_ID`)
    pub spreadsheet_id: String,
    /// API key for the spreadsheet service (`COURTSIDE_SHEETS_API_KEY`)
    pub sheets_api_key: String,
    /// Base URL of the text-generation API (`COURTSIDE_GEMINI_BASE_URL`)
    pub gemini_base_url: String,
    /// Text-generation API key (`COURTSIDE_GEMINI_API_KEY` or `GEMINI_API_KEY`)
    pub gemini_api_key: Option<String>,
    /// Text-generation model name (`COURTSIDE_GEMINI_MODEL`)
    pub gemini_model: String,
    /// Datastore read memoization TTL in seconds (`COURTSIDE_CACHE_TTL_SECS`)
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_owned(),
            spreadsheet_id: String::new(),
            sheets_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_owned(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a config error if a required variable is missing or a
    /// numeric variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let http_port = parse_env("COURTSIDE_HTTP_PORT", DEFAULT_HTTP_PORT)?;
        let cache_ttl_secs = parse_env("COURTSIDE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;

        let spreadsheet_id = require_env("COURTSIDE_SPREADSHEET_ID")?;
        let sheets_api_key = require_env("COURTSIDE_SHEETS_API_KEY")?;

        let gemini_api_key = env::var("COURTSIDE_GEMINI_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        if gemini_api_key.is_none() {
            warn!("no text-generation API key configured; advisor will use fixed fallbacks");
        }

        Ok(Self {
            http_port,
            sheets_base_url: env_or("COURTSIDE_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL),
            spreadsheet_id,
            sheets_api_key,
            gemini_base_url: env_or("COURTSIDE_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            gemini_api_key,
            gemini_model: env_or("COURTSIDE_GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            cache_ttl_secs,
        })
    }
}

/// Read an env var with a default when unset or empty.
fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_owned(),
    }
}

/// Read a required env var, failing with a config error when absent.
fn require_env(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::config(format!("{name} must be set")))
}

/// Parse a numeric env var, keeping the default when unset.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} is not a valid value: {raw}"))),
        _ => Ok(default),
    }
}

// ABOUTME: Text-generation provider abstraction for AI coaching integration
// ABOUTME: Single-shot prompt-in, text-out contract with pluggable backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Text-generation providers
//!
//! The advisor needs exactly one capability: send a natural-language
//! prompt, get a short text back. [`TextProvider`] captures that contract;
//! [`gemini::GeminiProvider`] is the production backend. Calls are
//! single-shot with no retry — the advisor layers fixed fallbacks on top,
//! so a provider failure never interrupts the daily flow.

/// Google Generative Language backend
pub mod gemini;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};

pub use gemini::GeminiProvider;

/// Single-shot text generation.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Send one prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an external-service error on any transport failure, API
    /// error status, or empty/malformed response.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Provider that always fails; used when no API key is configured so the
/// advisor runs on its fixed fallbacks.
struct DisabledProvider;

#[async_trait]
impl TextProvider for DisabledProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::external_service(
            "text-generation",
            "no API key configured",
        ))
    }
}

/// Build the provider described by the server configuration.
#[must_use]
pub fn provider_from_config(config: &ServerConfig) -> Arc<dyn TextProvider> {
    config.gemini_api_key.as_ref().map_or_else(
        || Arc::new(DisabledProvider) as Arc<dyn TextProvider>,
        |key| {
            Arc::new(GeminiProvider::new(
                config.gemini_base_url.clone(),
                key.clone(),
                config.gemini_model.clone(),
            ))
        },
    )
}

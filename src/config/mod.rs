// ABOUTME: Configuration module organization for the Courtside server
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Configuration management
//!
//! Courtside is configured exclusively through environment variables so
//! secrets stay in the hosting environment's secret mechanism. See
//! [`environment::ServerConfig`].

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;

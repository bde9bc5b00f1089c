// ABOUTME: Main library entry point for the Courtside practice tracker
// ABOUTME: Provides the REST API, spreadsheet store, and AI coaching advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

#![deny(unsafe_code)]

//! # Courtside
//!
//! A personal habit-tracking service for basketball practice. The server
//! renders a daily dashboard over a spreadsheet-backed datastore: a 14-day
//! achievement calendar, an AI-suggested task checklist, numeric practice
//! metrics, and a generated coaching comment after each daily report.
//!
//! ## Architecture
//!
//! The service follows a layered architecture:
//! - **Store**: typed access to the three spreadsheet worksheets
//!   (`Profiles`, `Metrics`, `History`), wrapped in a short-TTL memo that
//!   is invalidated on every write
//! - **Advisor**: single-shot text-generation calls with fixed fallbacks,
//!   so coaching never blocks the daily flow
//! - **Session**: per-interactive-session selection state keyed by an
//!   explicit session id
//! - **Dashboard**: the daily flow controller (calendar, today view,
//!   past-day review, report submission)
//! - **Routes**: thin axum handlers over [`context::ServerResources`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::config::environment::ServerConfig;
//! use courtside::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Courtside configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// AI coaching advisor: daily task suggestions and encouragement comments
pub mod advisor;

/// Configuration management (environment-only)
pub mod config;

/// Application constants: worksheet names, fixed labels, fallback texts
pub mod constants;

/// Focused dependency injection context shared by all routes
pub mod context;

/// Daily flow controller: calendar, achievement math, report submission
pub mod dashboard;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Text-generation provider abstraction for AI coaching integration
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for profiles, metrics, and history rows
pub mod models;

/// `HTTP` routes for the interactive dashboard surface
pub mod routes;

/// Per-session selection state (user, date, generated task list)
pub mod session;

/// Spreadsheet-backed datastore with short-TTL read memoization
pub mod store;

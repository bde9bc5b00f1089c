// ABOUTME: Route module organization for the Courtside HTTP surface
// ABOUTME: Assembles per-domain routers and shared request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Route module for the Courtside server
//!
//! Routes are organized by domain; each module contains route definitions
//! and thin handlers that delegate to the dashboard service. Every request
//! that touches session state carries an `x-session-id` header chosen by
//! the frontend.

/// Health check and system status routes
pub mod health;

/// Dashboard rendering and session selection routes
pub mod dashboard;

/// Profile settings routes
pub mod profile;

/// Daily report submission routes
pub mod report;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::ServerResources;
use crate::errors::{AppError, AppResult};

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use report::ReportRoutes;

/// Header carrying the interactive session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Extract the session id header.
///
/// # Errors
///
/// Returns invalid-input when the header is missing or not valid text.
pub fn session_id(headers: &HeaderMap) -> AppResult<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::invalid_input(format!("missing {SESSION_HEADER} header")))
}

/// Assemble the full application router with shared middleware.
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(ReportRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

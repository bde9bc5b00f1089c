// ABOUTME: Daily report submission route handlers
// ABOUTME: Accepts the checklist, metric values, and note for today's report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Report routes
//!
//! One endpoint: submit today's report for the session. The response
//! carries the computed achievement and the coaching comment so the
//! frontend can show them immediately after the re-render.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::context::ServerResources;
use crate::dashboard::ReportRequest;
use crate::errors::AppError;
use crate::routes::session_id;

/// Report routes
pub struct ReportRoutes;

impl ReportRoutes {
    /// Create all report routes.
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/report", post(Self::handle_submit_report))
            .with_state(resources)
    }

    async fn handle_submit_report(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ReportRequest>,
    ) -> Result<Response, AppError> {
        let session = session_id(&headers)?;
        let outcome = resources.dashboard.submit_report(&session, request).await?;
        Ok((StatusCode::OK, Json(outcome)).into_response())
    }
}

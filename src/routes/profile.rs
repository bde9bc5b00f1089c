// ABOUTME: Profile settings route handlers
// ABOUTME: Saves coach persona, goal, and tracked metrics for a user row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Profile routes
//!
//! The settings panel edits one `Profiles` row in place. Saving rewrites
//! the full worksheet, invalidates the read memo, and responds with the
//! freshly loaded row so the frontend re-renders from current data.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::put;
use axum::{Json, Router};

use crate::context::ServerResources;
use crate::dashboard::ProfileUpdate;
use crate::errors::AppError;

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes.
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", put(Self::handle_save_profile))
            .with_state(resources)
    }

    async fn handle_save_profile(
        State(resources): State<Arc<ServerResources>>,
        Json(update): Json<ProfileUpdate>,
    ) -> Result<Response, AppError> {
        let saved = resources.dashboard.save_profile(update).await?;
        Ok((StatusCode::OK, Json(saved)).into_response())
    }
}

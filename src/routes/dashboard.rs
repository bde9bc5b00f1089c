// ABOUTME: Dashboard rendering and session selection route handlers
// ABOUTME: Exposes the user selector, calendar selection, and the full dashboard view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Dashboard routes
//!
//! `GET /api/dashboard` renders the whole interactive surface for the
//! session: selector state, profile panel, 14-day calendar, and either
//! today's checklist or a past-day review. The selection endpoints mutate
//! session state and the frontend re-requests the view afterwards — a
//! full re-render per interaction, never an incremental patch.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::context::ServerResources;
use crate::errors::AppError;
use crate::routes::session_id;

/// Request to select a user for the session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectUserRequest {
    /// User id from the selector
    pub user_id: String,
}

/// Request to select a calendar date for the session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectDateRequest {
    /// Clicked calendar date
    pub date: NaiveDate,
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes.
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profiles", get(Self::handle_list_profiles))
            .route("/api/dashboard", get(Self::handle_dashboard))
            .route("/api/session", post(Self::handle_create_session))
            .route("/api/session/user", post(Self::handle_select_user))
            .route("/api/session/date", post(Self::handle_select_date))
            .with_state(resources)
    }

    /// Mint a fresh session id for a frontend that has none yet.
    async fn handle_create_session() -> Response {
        (
            StatusCode::CREATED,
            Json(json!({ "session_id": uuid::Uuid::new_v4() })),
        )
            .into_response()
    }

    /// User selector options: id plus coach name per profile row.
    async fn handle_list_profiles(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let profiles = resources.dashboard.profiles().await?;
        let users: Vec<_> = profiles
            .iter()
            .map(|p| {
                json!({
                    "user_id": p.user_id,
                    "coach_name": p.coach_name,
                })
            })
            .collect();
        Ok((StatusCode::OK, Json(json!({ "users": users }))).into_response())
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let session = session_id(&headers)?;
        let view = resources.dashboard.view(&session).await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    async fn handle_select_user(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SelectUserRequest>,
    ) -> Result<Response, AppError> {
        let session = session_id(&headers)?;
        resources
            .dashboard
            .select_user(&session, &request.user_id)
            .await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn handle_select_date(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SelectDateRequest>,
    ) -> Result<Response, AppError> {
        let session = session_id(&headers)?;
        resources.dashboard.select_date(&session, request.date);
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

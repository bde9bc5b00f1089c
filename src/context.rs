// ABOUTME: Dependency injection context wiring the store, advisor, and sessions
// ABOUTME: One ServerResources instance is shared by every route handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Server resources
//!
//! All route handlers receive one [`ServerResources`] via axum state. The
//! constructor owns the wiring: the caching decorator around the backing
//! store and the dashboard service over store + advisor + sessions.

use std::sync::Arc;
use std::time::Duration;

use crate::advisor::CoachingAdvisor;
use crate::config::ServerConfig;
use crate::dashboard::DashboardService;
use crate::llm::TextProvider;
use crate::session::SessionManager;
use crate::store::{CachedStore, TableStore};

/// Shared dependency bundle for the HTTP layer.
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Memoizing datastore
    pub store: Arc<CachedStore>,
    /// Session registry
    pub sessions: Arc<SessionManager>,
    /// Daily flow controller
    pub dashboard: DashboardService,
}

impl ServerResources {
    /// Wire the resource graph from a backing store and a text provider.
    #[must_use]
    pub fn new(
        config: ServerConfig,
        backing_store: Box<dyn TableStore>,
        provider: Arc<dyn TextProvider>,
    ) -> Self {
        let store = Arc::new(CachedStore::new(
            backing_store,
            Duration::from_secs(config.cache_ttl_secs),
        ));
        let sessions = Arc::new(SessionManager::new());
        let advisor = Arc::new(CoachingAdvisor::new(provider));
        let dashboard = DashboardService::new(
            Arc::clone(&store),
            Arc::clone(&advisor),
            Arc::clone(&sessions),
        );

        Self {
            config: Arc::new(config),
            store,
            sessions,
            dashboard,
        }
    }
}

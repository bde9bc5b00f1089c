// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides store seeding, scripted text providers, and server spawn helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

//! Shared test utilities for `courtside`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::task::JoinHandle;

use courtside::config::environment::ServerConfig;
use courtside::context::ServerResources;
use courtside::dashboard::DashboardService;
use courtside::errors::{AppError, AppResult};
use courtside::llm::TextProvider;
use courtside::models::{HistoryEntry, MetricEntry, Profile};
use courtside::routes::build_router;
use courtside::store::{MemoryStore, Snapshot, TableStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Text provider test doubles
// ============================================================================

/// Provider that returns a fixed response and counts calls
pub struct ScriptedProvider {
    response: String,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_owned(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Four plausible task lines, bullet-marked like real generations
    pub fn with_task_list() -> Self {
        Self::new("- ドリブル練習\n- シュート50本\n- フットワーク\n- ストレッチ")
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Provider that always fails, for fallback-path tests
pub struct FailingProvider;

#[async_trait]
impl TextProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::external_service("test", "simulated outage"))
    }
}

// ============================================================================
// Store helpers
// ============================================================================

/// Delegating store so tests keep an `Arc<MemoryStore>` handle (for load
/// counting and write-failure arming) while the cache owns a `Box`.
pub struct SharedStore(pub Arc<MemoryStore>);

#[async_trait]
impl TableStore for SharedStore {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    async fn load(&self) -> AppResult<Snapshot> {
        self.0.load().await
    }

    async fn persist_profiles(&self, rows: &[Profile]) -> AppResult<()> {
        self.0.persist_profiles(rows).await
    }

    async fn persist_metrics(&self, rows: &[MetricEntry]) -> AppResult<()> {
        self.0.persist_metrics(rows).await
    }

    async fn persist_history(&self, rows: &[HistoryEntry]) -> AppResult<()> {
        self.0.persist_history(rows).await
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn today() -> NaiveDate {
    DashboardService::today()
}

pub fn test_profile(user_id: &str) -> Profile {
    Profile {
        user_id: user_id.to_owned(),
        coach_name: "安西コーチ".to_owned(),
        goal: "free throw form".to_owned(),
        tracked_metrics: "ハンドリング,シュート成功率".to_owned(),
    }
}

pub fn metric(user_id: &str, date: NaiveDate, name: &str, value: f64) -> MetricEntry {
    MetricEntry {
        user_id: user_id.to_owned(),
        date,
        metric_name: name.to_owned(),
        value,
    }
}

pub fn history(user_id: &str, date: NaiveDate, comment: &str, note: &str) -> HistoryEntry {
    HistoryEntry {
        user_id: user_id.to_owned(),
        date,
        metric_name: "達成度".to_owned(),
        value: 50.0,
        coach_comment: comment.to_owned(),
        free_text: note.to_owned(),
    }
}

/// Snapshot with one user profile and no recorded days
pub fn seeded_snapshot() -> Snapshot {
    Snapshot {
        profiles: vec![test_profile("A")],
        metrics: Vec::new(),
        history: Vec::new(),
    }
}

// ============================================================================
// Resource wiring
// ============================================================================

/// Test server configuration (never reads the environment)
pub fn test_config() -> ServerConfig {
    ServerConfig {
        spreadsheet_id: "test-spreadsheet".to_owned(),
        sheets_api_key: "test-key".to_owned(),
        ..ServerConfig::default()
    }
}

/// Build resources over a seeded in-memory store and the given provider.
/// Returns the shared store handle alongside so tests can observe loads.
pub fn build_test_resources(
    snapshot: Snapshot,
    provider: Arc<dyn TextProvider>,
) -> (Arc<ServerResources>, Arc<MemoryStore>) {
    init_test_logging();
    let memory = Arc::new(MemoryStore::with_snapshot(snapshot));
    let resources = Arc::new(ServerResources::new(
        test_config(),
        Box::new(SharedStore(Arc::clone(&memory))),
        provider,
    ));
    (resources, memory)
}

// ============================================================================
// HTTP server spawn
// ============================================================================

/// Handle for a spawned HTTP server that cleans up automatically on drop
pub struct HttpServerHandle {
    task_handle: JoinHandle<()>,
    port: u16,
}

impl HttpServerHandle {
    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for HttpServerHandle {
    fn drop(&mut self) {
        self.task_handle.abort();
    }
}

/// Spawn the full router on an OS-assigned port for E2E route tests
pub async fn spawn_test_server(resources: Arc<ServerResources>) -> HttpServerHandle {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let port = listener.local_addr().expect("listener address").port();

    let app = build_router(resources);
    let task_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed to run");
    });

    HttpServerHandle { task_handle, port }
}

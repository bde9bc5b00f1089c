// ABOUTME: In-process TableStore used by the test suite
// ABOUTME: Counts loads and can be armed to fail writes for error-path tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! In-memory store
//!
//! Holds the three tables in process memory behind an async lock. The
//! load counter makes memoization observable, and `fail_writes` arms the
//! persist paths to error without touching stored data — mirroring a
//! remote write failure that leaves the worksheet unchanged.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, MetricEntry, Profile};
use crate::store::{Snapshot, TableStore};

/// In-memory implementation of [`TableStore`].
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Snapshot>,
    load_count: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
            load_count: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Number of `load` calls that reached this store.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Arm or disarm write failures.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("simulated write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> AppResult<Snapshot> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.data.read().await.clone())
    }

    async fn persist_profiles(&self, rows: &[Profile]) -> AppResult<()> {
        self.check_writable()?;
        self.data.write().await.profiles = rows.to_vec();
        Ok(())
    }

    async fn persist_metrics(&self, rows: &[MetricEntry]) -> AppResult<()> {
        self.check_writable()?;
        self.data.write().await.metrics = rows.to_vec();
        Ok(())
    }

    async fn persist_history(&self, rows: &[HistoryEntry]) -> AppResult<()> {
        self.check_writable()?;
        self.data.write().await.history = rows.to_vec();
        Ok(())
    }
}

// ABOUTME: Caching decorator for TableStore that memoizes loads for a short TTL
// ABOUTME: Every successful write invalidates the memo before returning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! # Caching table store
//!
//! Decorator that wraps any [`TableStore`] and memoizes `load()` for a
//! short fixed duration. The dashboard re-renders on every interaction, so
//! without the memo each rerun would refetch three worksheets.
//!
//! Invalidation is part of the write path: each `persist_*` that succeeds
//! drops the memo before returning, so a write is always followed by a
//! fresh read. A failed write leaves the memo in place — the remote table
//! is assumed unchanged.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::AppResult;
use crate::models::{HistoryEntry, MetricEntry, Profile};
use crate::store::{Snapshot, TableStore};

/// Memoized snapshot with its expiry instant.
struct CacheEntry {
    snapshot: Snapshot,
    expires_at: Instant,
}

/// Caching wrapper for any [`TableStore`] implementation.
pub struct CachedStore {
    inner: Box<dyn TableStore>,
    ttl: Duration,
    memo: RwLock<Option<CacheEntry>>,
}

impl CachedStore {
    /// Wrap a store with the given memoization TTL.
    #[must_use]
    pub fn new(inner: Box<dyn TableStore>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            memo: RwLock::new(None),
        }
    }

    /// Drop the memoized snapshot so the next load refetches.
    pub async fn invalidate(&self) {
        *self.memo.write().await = None;
        debug!(target: "courtside::cache", store = self.inner.name(), "memo invalidated");
    }

    /// Return the memoized snapshot when it is still fresh.
    async fn fresh_memo(&self) -> Option<Snapshot> {
        let memo = self.memo.read().await;
        memo.as_ref()
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.snapshot.clone())
    }
}

#[async_trait]
impl TableStore for CachedStore {
    fn name(&self) -> &'static str {
        "cached"
    }

    async fn load(&self) -> AppResult<Snapshot> {
        if let Some(snapshot) = self.fresh_memo().await {
            debug!(target: "courtside::cache", cache_hit = true, "load served from memo");
            return Ok(snapshot);
        }

        debug!(target: "courtside::cache", cache_hit = false, "load fetching from store");
        let snapshot = self.inner.load().await?;
        *self.memo.write().await = Some(CacheEntry {
            snapshot: snapshot.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        Ok(snapshot)
    }

    async fn persist_profiles(&self, rows: &[Profile]) -> AppResult<()> {
        self.inner.persist_profiles(rows).await?;
        self.invalidate().await;
        Ok(())
    }

    async fn persist_metrics(&self, rows: &[MetricEntry]) -> AppResult<()> {
        self.inner.persist_metrics(rows).await?;
        self.invalidate().await;
        Ok(())
    }

    async fn persist_history(&self, rows: &[HistoryEntry]) -> AppResult<()> {
        self.inner.persist_history(rows).await?;
        self.invalidate().await;
        Ok(())
    }
}

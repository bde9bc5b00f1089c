// ABOUTME: Spreadsheet-backed datastore abstraction for the three practice tables
// ABOUTME: Provides the TableStore trait, typed snapshots, and pluggable backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Datastore layer
//!
//! The datastore is a remote spreadsheet with three worksheets. Reads
//! return the full content of all three as a typed [`Snapshot`]; writes
//! replace one worksheet's full contents. Backends implement
//! [`TableStore`]:
//!
//! - [`sheets::SheetStore`] — the Google Sheets values API client
//! - [`memory::MemoryStore`] — in-process store for tests
//! - [`cache::CachedStore`] — short-TTL memoization decorator over either
//!
//! Any read failure (transport, missing worksheet, unparsable date) fails
//! the whole load; there is no partial recovery.

/// Short-TTL read memoization decorator
pub mod cache;
/// In-process store used by the test suite
pub mod memory;
/// Google Sheets values API backend
pub mod sheets;
/// Raw worksheet grids with column normalization and type coercion
pub mod table;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{HistoryEntry, MetricEntry, Profile};

pub use cache::CachedStore;
pub use memory::MemoryStore;
pub use sheets::SheetStore;
pub use table::{normalize_column, SheetTable};

/// Full typed contents of the three worksheets at one load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// One row per user
    pub profiles: Vec<Profile>,
    /// Append-only metric observations
    pub metrics: Vec<MetricEntry>,
    /// Append-only daily summary rows
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Profile for a user, if present.
    #[must_use]
    pub fn profile(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.user_id == user_id)
    }
}

/// Access to the three spreadsheet-backed tables.
///
/// `load` returns everything; each `persist_*` replaces one worksheet's
/// full contents (the spreadsheet API's contract — appends are expressed
/// as load-extend-persist by the caller).
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Backend name used in logs.
    fn name(&self) -> &'static str;

    /// Load the full contents of all three worksheets.
    ///
    /// # Errors
    ///
    /// Returns a datastore error on any transport failure, missing
    /// worksheet, or row with an unparsable date.
    async fn load(&self) -> AppResult<Snapshot>;

    /// Replace the `Profiles` worksheet with the given rows.
    ///
    /// # Errors
    ///
    /// Returns a datastore error if the write fails; the remote table is
    /// assumed unchanged in that case.
    async fn persist_profiles(&self, rows: &[Profile]) -> AppResult<()>;

    /// Replace the `Metrics` worksheet with the given rows.
    ///
    /// # Errors
    ///
    /// Returns a datastore error if the write fails.
    async fn persist_metrics(&self, rows: &[MetricEntry]) -> AppResult<()>;

    /// Replace the `History` worksheet with the given rows.
    ///
    /// # Errors
    ///
    /// Returns a datastore error if the write fails.
    async fn persist_history(&self, rows: &[HistoryEntry]) -> AppResult<()>;
}

// ABOUTME: Google Sheets values API backend for the practice tables
// ABOUTME: Full-range reads per worksheet and full-replace writes with clear-then-update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Google Sheets store
//!
//! Each worksheet is read as its full value range and written back as a
//! full replacement (clear, then update). The API key is passed as a query
//! parameter; the base URL is configurable so tests can point the client
//! at a local double.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{HISTORY_SHEET, METRICS_SHEET, PROFILES_SHEET};
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, MetricEntry, Profile};
use crate::store::table::{
    encode_history, encode_metrics, encode_profiles, SheetTable,
};
use crate::store::{Snapshot, TableStore};

/// Sheets API client configuration.
#[derive(Debug, Clone)]
pub struct SheetStoreConfig {
    /// Values API base URL (default: the public Sheets v4 endpoint)
    pub base_url: String,
    /// Spreadsheet identifier
    pub spreadsheet_id: String,
    /// API key passed as the `key` query parameter
    pub api_key: String,
}

/// Value-range payload shape of the Sheets values API.
#[derive(Debug, Serialize, Deserialize)]
struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(rename = "majorDimension", skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<Vec<String>>,
}

/// Google Sheets implementation of [`TableStore`].
pub struct SheetStore {
    config: SheetStoreConfig,
    http_client: Client,
}

impl SheetStore {
    /// Create a new sheet store.
    #[must_use]
    pub fn new(config: SheetStoreConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/{}/values/{range}",
            self.config.base_url, self.config.spreadsheet_id
        )
    }

    /// Fetch one worksheet's full value grid.
    async fn fetch_values(&self, sheet: &str) -> AppResult<Vec<Vec<String>>> {
        let response = self
            .http_client
            .get(self.values_url(sheet))
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::external_service("sheets", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::database(format!(
                "reading worksheet {sheet} failed with HTTP {status}"
            )));
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::database(format!("malformed worksheet {sheet}: {e}")))?;

        debug!(
            target: "courtside::store",
            sheet,
            rows = range.values.len(),
            "worksheet fetched"
        );
        Ok(range.values)
    }

    /// Replace one worksheet's contents: clear the range, then write the
    /// new grid. A failure between the two steps is reported as a write
    /// failure and surfaces to the caller.
    async fn replace_values(&self, sheet: &str, values: Vec<Vec<String>>) -> AppResult<()> {
        let clear_url = format!("{}:clear", self.values_url(sheet));
        let response = self
            .http_client
            .post(&clear_url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::external_service("sheets", e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::database(format!(
                "clearing worksheet {sheet} failed with HTTP {status}"
            )));
        }

        let row_count = values.len();
        let body = ValueRange {
            range: Some(sheet.to_owned()),
            major_dimension: Some("ROWS".to_owned()),
            values,
        };
        let response = self
            .http_client
            .put(self.values_url(sheet))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("valueInputOption", "RAW"),
            ])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("sheets", e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            warn!(
                target: "courtside::store",
                sheet,
                %status,
                "worksheet replace failed after clear"
            );
            return Err(AppError::database(format!(
                "writing worksheet {sheet} failed with HTTP {status}"
            )));
        }

        debug!(target: "courtside::store", sheet, rows = row_count, "worksheet replaced");
        Ok(())
    }
}

#[async_trait]
impl TableStore for SheetStore {
    fn name(&self) -> &'static str {
        "sheets"
    }

    async fn load(&self) -> AppResult<Snapshot> {
        let profiles = SheetTable::from_values(self.fetch_values(PROFILES_SHEET).await?)
            .decode_profiles(PROFILES_SHEET)?;
        let metrics = SheetTable::from_values(self.fetch_values(METRICS_SHEET).await?)
            .decode_metrics(METRICS_SHEET)?;
        let history = SheetTable::from_values(self.fetch_values(HISTORY_SHEET).await?)
            .decode_history(HISTORY_SHEET)?;

        Ok(Snapshot {
            profiles,
            metrics,
            history,
        })
    }

    async fn persist_profiles(&self, rows: &[Profile]) -> AppResult<()> {
        self.replace_values(PROFILES_SHEET, encode_profiles(rows))
            .await
    }

    async fn persist_metrics(&self, rows: &[MetricEntry]) -> AppResult<()> {
        self.replace_values(METRICS_SHEET, encode_metrics(rows))
            .await
    }

    async fn persist_history(&self, rows: &[HistoryEntry]) -> AppResult<()> {
        self.replace_values(HISTORY_SHEET, encode_history(rows))
            .await
    }
}

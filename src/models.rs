// ABOUTME: Common data models for the three spreadsheet-backed tables
// ABOUTME: Profiles, metric entries, and daily history rows with coercion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Data models for the spreadsheet tables
//!
//! The three tables are row-oriented with logical (unenforced) relations:
//! `Profiles` has one row per user, `Metrics` and `History` are append-only
//! logs keyed by (user, date). Fields mirror the worksheet columns after
//! normalization; values beyond type coercion are accepted as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MISSING_GOAL_PLACEHOLDER;

/// One row of the `Profiles` worksheet: a user and their coaching setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier
    pub user_id: String,
    /// Coach persona name used in generation prompts
    pub coach_name: String,
    /// Free-text practice goal; empty when unset
    pub goal: String,
    /// Comma-separated tracked metric names, stored verbatim
    pub tracked_metrics: String,
}

impl Profile {
    /// Tracked metric names split out of the comma-separated column.
    ///
    /// Both ASCII and full-width commas appear in stored rows; empty
    /// fragments are dropped.
    #[must_use]
    pub fn metric_names(&self) -> Vec<String> {
        self.tracked_metrics
            .split([',', '、', '，'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Goal text with a placeholder when unset.
    #[must_use]
    pub fn goal_or_placeholder(&self) -> &str {
        if is_missing_value(&self.goal) {
            MISSING_GOAL_PLACEHOLDER
        } else {
            &self.goal
        }
    }
}

/// One row of the `Metrics` worksheet: a single numeric observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    /// Owning user
    pub user_id: String,
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Metric name; the daily summary uses the fixed achievement label
    pub metric_name: String,
    /// Observed value (achievement rows store the integer percent)
    pub value: f64,
}

/// One row of the `History` worksheet: the daily summary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Owning user
    pub user_id: String,
    /// Calendar date of the report
    pub date: NaiveDate,
    /// Fixed achievement label (kept for worksheet compatibility)
    pub metric_name: String,
    /// Achievement percent for the day
    pub value: f64,
    /// Generated coaching comment; may be empty
    pub coach_comment: String,
    /// Free-text note entered with the report; may be empty
    pub free_text: String,
}

/// Whether a cell value counts as missing.
///
/// The original datastore was written through pandas, which leaves `NaN`
/// markers in place of blanks; both forms are treated as absent.
#[must_use]
pub fn is_missing_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") || trimmed == "None"
}

/// Coerce a worksheet cell to a numeric value.
///
/// Validation beyond type coercion is out of scope: anything unparsable
/// coerces to `0.0` rather than failing the row.
#[must_use]
pub fn coerce_numeric(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

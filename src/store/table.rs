// ABOUTME: Raw worksheet grid handling with column normalization and date coercion
// ABOUTME: Converts between string cell grids and the typed table models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Worksheet grid parsing
//!
//! The values API hands back worksheets as grids of strings. [`SheetTable`]
//! wraps one grid: the first row is the header (normalized on load), the
//! rest are data rows. Columns named `date` are parsed into calendar
//! dates; an unparsable date fails the whole table, which the store turns
//! into a failed load.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::{coerce_numeric, HistoryEntry, MetricEntry, Profile};

/// Normalize a worksheet column name: trim surrounding whitespace and
/// lowercase. Idempotent by construction.
#[must_use]
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Accepted calendar date formats in `date` columns.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a `date` cell, trying each accepted format.
///
/// # Errors
///
/// Returns a datastore error when no format matches; the caller aborts
/// the whole load rather than skipping the row.
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AppError::database(format!("unparsable date cell: {trimmed:?}")))
}

/// Render a numeric cell without a trailing `.0` for whole values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// One worksheet as a header plus string data rows.
#[derive(Debug, Clone)]
pub struct SheetTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Build a table from a raw value grid. The first row is taken as the
    /// header and normalized; an empty grid yields an empty table with no
    /// columns.
    #[must_use]
    pub fn from_values(mut values: Vec<Vec<String>>) -> Self {
        if values.is_empty() {
            return Self {
                columns: Vec::new(),
                rows: Vec::new(),
            };
        }
        let columns = values.remove(0).iter().map(|c| normalize_column(c)).collect();
        Self {
            columns,
            rows: values,
        }
    }

    /// Normalized column names, in sheet order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, sheet: &str, name: &str) -> AppResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AppError::database(format!("{sheet} worksheet is missing column {name:?}")))
    }

    /// Cell value at (row, column index); short rows read as empty cells.
    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Decode the `Profiles` worksheet.
    ///
    /// # Errors
    ///
    /// Returns a datastore error when a required column is absent.
    pub fn decode_profiles(&self, sheet: &str) -> AppResult<Vec<Profile>> {
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }
        let user_id = self.column_index(sheet, "user_id")?;
        let coach_name = self.column_index(sheet, "coach_name")?;
        let goal = self.column_index(sheet, "goal")?;
        let tracked = self.column_index(sheet, "tracked_metrics")?;

        Ok((0..self.len())
            .map(|row| Profile {
                user_id: self.cell(row, user_id).trim().to_owned(),
                coach_name: self.cell(row, coach_name).trim().to_owned(),
                goal: self.cell(row, goal).trim().to_owned(),
                tracked_metrics: self.cell(row, tracked).trim().to_owned(),
            })
            .filter(|p| !p.user_id.is_empty())
            .collect())
    }

    /// Decode the `Metrics` worksheet.
    ///
    /// # Errors
    ///
    /// Returns a datastore error when a required column is absent or any
    /// date cell fails to parse.
    pub fn decode_metrics(&self, sheet: &str) -> AppResult<Vec<MetricEntry>> {
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }
        let user_id = self.column_index(sheet, "user_id")?;
        let date = self.column_index(sheet, "date")?;
        let metric_name = self.column_index(sheet, "metric_name")?;
        let value = self.column_index(sheet, "value")?;

        let mut entries = Vec::with_capacity(self.len());
        for row in 0..self.len() {
            if self.cell(row, user_id).trim().is_empty() {
                continue;
            }
            entries.push(MetricEntry {
                user_id: self.cell(row, user_id).trim().to_owned(),
                date: parse_date(self.cell(row, date))?,
                metric_name: self.cell(row, metric_name).trim().to_owned(),
                value: coerce_numeric(self.cell(row, value)),
            });
        }
        Ok(entries)
    }

    /// Decode the `History` worksheet.
    ///
    /// # Errors
    ///
    /// Returns a datastore error when a required column is absent or any
    /// date cell fails to parse.
    pub fn decode_history(&self, sheet: &str) -> AppResult<Vec<HistoryEntry>> {
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }
        let user_id = self.column_index(sheet, "user_id")?;
        let date = self.column_index(sheet, "date")?;
        let metric_name = self.column_index(sheet, "metric_name")?;
        let value = self.column_index(sheet, "value")?;
        let coach_comment = self.column_index(sheet, "coach_comment")?;
        let free_text = self.column_index(sheet, "free_text")?;

        let mut entries = Vec::with_capacity(self.len());
        for row in 0..self.len() {
            if self.cell(row, user_id).trim().is_empty() {
                continue;
            }
            entries.push(HistoryEntry {
                user_id: self.cell(row, user_id).trim().to_owned(),
                date: parse_date(self.cell(row, date))?,
                metric_name: self.cell(row, metric_name).trim().to_owned(),
                value: coerce_numeric(self.cell(row, value)),
                coach_comment: self.cell(row, coach_comment).trim().to_owned(),
                free_text: self.cell(row, free_text).trim().to_owned(),
            });
        }
        Ok(entries)
    }
}

/// Encode profiles back to a value grid (header + rows).
#[must_use]
pub fn encode_profiles(rows: &[Profile]) -> Vec<Vec<String>> {
    let mut values = vec![vec![
        "user_id".to_owned(),
        "coach_name".to_owned(),
        "goal".to_owned(),
        "tracked_metrics".to_owned(),
    ]];
    values.extend(rows.iter().map(|p| {
        vec![
            p.user_id.clone(),
            p.coach_name.clone(),
            p.goal.clone(),
            p.tracked_metrics.clone(),
        ]
    }));
    values
}

/// Encode metric entries back to a value grid (header + rows).
#[must_use]
pub fn encode_metrics(rows: &[MetricEntry]) -> Vec<Vec<String>> {
    let mut values = vec![vec![
        "user_id".to_owned(),
        "date".to_owned(),
        "metric_name".to_owned(),
        "value".to_owned(),
    ]];
    values.extend(rows.iter().map(|m| {
        vec![
            m.user_id.clone(),
            m.date.format("%Y-%m-%d").to_string(),
            m.metric_name.clone(),
            format_number(m.value),
        ]
    }));
    values
}

/// Encode history entries back to a value grid (header + rows).
#[must_use]
pub fn encode_history(rows: &[HistoryEntry]) -> Vec<Vec<String>> {
    let mut values = vec![vec![
        "user_id".to_owned(),
        "date".to_owned(),
        "metric_name".to_owned(),
        "value".to_owned(),
        "coach_comment".to_owned(),
        "free_text".to_owned(),
    ]];
    values.extend(rows.iter().map(|h| {
        vec![
            h.user_id.clone(),
            h.date.format("%Y-%m-%d").to_string(),
            h.metric_name.clone(),
            format_number(h.value),
            h.coach_comment.clone(),
            h.free_text.clone(),
        ]
    }));
    values
}

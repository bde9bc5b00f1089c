// ABOUTME: Tests for worksheet grid parsing, normalization, and encoding
// ABOUTME: Covers column normalization idempotence and date coercion failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use courtside::errors::ErrorCode;
use courtside::models::{coerce_numeric, is_missing_value};
use courtside::store::normalize_column;
use courtside::store::table::{
    encode_metrics, encode_profiles, format_number, parse_date, SheetTable,
};

use common::{date, metric, test_profile};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|&cell| cell.to_owned()).collect())
        .collect()
}

#[test]
fn normalize_column_trims_and_lowercases() {
    assert_eq!(normalize_column("  User_ID "), "user_id");
    assert_eq!(normalize_column("Coach_Name"), "coach_name");
    assert_eq!(normalize_column("date"), "date");
}

#[test]
fn normalize_column_is_idempotent() {
    for raw in ["  User_ID ", "GOAL", "tracked_metrics", " Free_Text"] {
        let once = normalize_column(raw);
        assert_eq!(normalize_column(&once), once);
    }
}

#[test]
fn decode_profiles_normalizes_header_variants() {
    let table = SheetTable::from_values(grid(&[
        &[" User_ID ", "Coach_Name", "GOAL", "Tracked_Metrics"],
        &["A", "安西コーチ", "free throw form", "ハンドリング"],
    ]));
    let profiles = table.decode_profiles("Profiles").unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, "A");
    assert_eq!(profiles[0].coach_name, "安西コーチ");
    assert_eq!(profiles[0].metric_names(), vec!["ハンドリング"]);
}

#[test]
fn decode_profiles_requires_columns() {
    let table = SheetTable::from_values(grid(&[&["user_id", "coach_name"], &["A", "x"]]));
    let err = table.decode_profiles("Profiles").unwrap_err();
    assert_eq!(err.code, ErrorCode::DataStoreError);
}

#[test]
fn decode_metrics_parses_dates_and_values() {
    let table = SheetTable::from_values(grid(&[
        &["user_id", "date", "metric_name", "value"],
        &["A", "2026-08-01", "達成度", "50"],
        &["A", "2026/08/02", "ハンドリング", "7.5"],
    ]));
    let metrics = table.decode_metrics("Metrics").unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].date, date("2026-08-01"));
    assert_eq!(metrics[0].value, 50.0);
    assert_eq!(metrics[1].date, date("2026-08-02"));
    assert_eq!(metrics[1].value, 7.5);
}

#[test]
fn unparsable_date_fails_the_whole_table() {
    let table = SheetTable::from_values(grid(&[
        &["user_id", "date", "metric_name", "value"],
        &["A", "2026-08-01", "達成度", "50"],
        &["A", "not-a-date", "ハンドリング", "7.5"],
    ]));
    let err = table.decode_metrics("Metrics").unwrap_err();
    assert_eq!(err.code, ErrorCode::DataStoreError);
}

#[test]
fn parse_date_accepts_both_separators() {
    assert_eq!(parse_date(" 2026-08-07 ").unwrap(), date("2026-08-07"));
    assert_eq!(parse_date("2026/08/07").unwrap(), date("2026-08-07"));
    assert!(parse_date("08-07-2026").is_err());
}

#[test]
fn numeric_coercion_defaults_to_zero() {
    assert_eq!(coerce_numeric("7.5"), 7.5);
    assert_eq!(coerce_numeric(" 50 "), 50.0);
    assert_eq!(coerce_numeric(""), 0.0);
    assert_eq!(coerce_numeric("abc"), 0.0);
}

#[test]
fn missing_value_markers() {
    assert!(is_missing_value(""));
    assert!(is_missing_value("  "));
    assert!(is_missing_value("nan"));
    assert!(is_missing_value("NaN"));
    assert!(!is_missing_value("良い練習だった"));
}

#[test]
fn format_number_drops_trailing_zero_fraction() {
    assert_eq!(format_number(50.0), "50");
    assert_eq!(format_number(7.5), "7.5");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn encoded_grids_round_trip_through_decode() {
    let profiles = vec![test_profile("A")];
    let encoded = encode_profiles(&profiles);
    let decoded = SheetTable::from_values(encoded)
        .decode_profiles("Profiles")
        .unwrap();
    assert_eq!(decoded, profiles);

    let metrics = vec![metric("A", date("2026-08-01"), "達成度", 50.0)];
    let encoded = encode_metrics(&metrics);
    let decoded = SheetTable::from_values(encoded)
        .decode_metrics("Metrics")
        .unwrap();
    assert_eq!(decoded, metrics);
}

#[test]
fn empty_grid_decodes_to_no_rows() {
    let table = SheetTable::from_values(Vec::new());
    assert!(table.is_empty());
    assert!(table.decode_profiles("Profiles").unwrap().is_empty());
    assert!(table.decode_metrics("Metrics").unwrap().is_empty());
    assert!(table.decode_history("History").unwrap().is_empty());
}

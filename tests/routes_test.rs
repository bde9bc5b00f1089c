// ABOUTME: HTTP integration tests over a spawned server on a random port
// ABOUTME: Exercises the dashboard surface end-to-end with a real axum stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use chrono::Days;
use serde_json::{json, Value};

use common::{build_test_resources, seeded_snapshot, spawn_test_server, today, ScriptedProvider};

const SESSION: &str = "e2e-session";

async fn get_json(client: &reqwest::Client, url: &str) -> (reqwest::StatusCode, Value) {
    let response = client
        .get(url)
        .header("x-session-id", SESSION)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(
    client: &reqwest::Client,
    url: &str,
    body: Value,
) -> (reqwest::StatusCode, Value) {
    let response = client
        .post(url)
        .header("x-session-id", SESSION)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;

    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, &format!("{}/api/health", server.base_url())).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "courtside");
}

#[tokio::test]
async fn session_bootstrap_mints_an_id() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/session", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert!(!body["session_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_requires_session_header() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/dashboard", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn full_interactive_flow_over_http() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;
    let base = server.base_url();
    let client = reqwest::Client::new();

    // Selector options come from the Profiles worksheet.
    let (status, body) = get_json(&client, &format!("{base}/api/profiles")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["users"][0]["user_id"], "A");

    // Before selection the dashboard is in the selector state.
    let (_, body) = get_json(&client, &format!("{base}/api/dashboard")).await;
    assert_eq!(body["state"], "selecting_user");

    // Selecting a user lands on today's view with a 14-cell calendar.
    let (status, _) = post_json(
        &client,
        &format!("{base}/api/session/user"),
        json!({ "user_id": "A" }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::NO_CONTENT);

    let (_, body) = get_json(&client, &format!("{base}/api/dashboard")).await;
    assert_eq!(body["state"], "viewing_today");
    assert_eq!(body["calendar"].as_array().unwrap().len(), 14);
    assert_eq!(body["today"]["tasks"].as_array().unwrap().len(), 4);
    assert_eq!(body["profile"]["coach_name"], "安西コーチ");

    // Submit today's report: 2 of 4 tasks checked plus one metric.
    let (status, body) = post_json(
        &client,
        &format!("{base}/api/report"),
        json!({
            "checked": [true, true, false, false],
            "metrics": [{ "name": "ハンドリング", "value": 7.5 }],
            "note": "良い練習だった",
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["achievement"], 50);
    assert!(body["comment"].as_str().is_some());

    // The calendar now shows today's partial achievement.
    let (_, body) = get_json(&client, &format!("{base}/api/dashboard")).await;
    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar.last().unwrap()["tier"], "mid");

    // A past date with no rows renders the empty state.
    let past_day = today().checked_sub_days(Days::new(5)).unwrap();
    post_json(
        &client,
        &format!("{base}/api/session/date"),
        json!({ "date": past_day }),
    )
    .await;
    let (_, body) = get_json(&client, &format!("{base}/api/dashboard")).await;
    assert_eq!(body["state"], "viewing_past_date");
    assert_eq!(body["past"]["empty"], true);

    // Today's just-submitted rows are reviewable after flipping back.
    post_json(
        &client,
        &format!("{base}/api/session/date"),
        json!({ "date": today() }),
    )
    .await;
    let (_, body) = get_json(&client, &format!("{base}/api/dashboard")).await;
    assert_eq!(body["state"], "viewing_today");
}

#[tokio::test]
async fn selecting_unknown_user_is_not_found() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;

    let (status, body) = post_json(
        &reqwest::Client::new(),
        &format!("{}/api/session/user", server.base_url()),
        json!({ "user_id": "nobody" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn profile_save_responds_with_fresh_row() {
    let provider = Arc::new(ScriptedProvider::with_task_list());
    let (resources, _memory) = build_test_resources(seeded_snapshot(), provider);
    let server = spawn_test_server(resources).await;

    let response = reqwest::Client::new()
        .put(format!("{}/api/profile", server.base_url()))
        .json(&json!({
            "user_id": "A",
            "coach_name": "安西コーチ",
            "goal": "レイアップ強化",
            "tracked_metrics": "ハンドリング,体幹",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["goal"], "レイアップ強化");
    assert_eq!(body["tracked_metrics"], "ハンドリング,体幹");
}

// ABOUTME: AI coaching advisor producing daily task suggestions and encouragement
// ABOUTME: Wraps a TextProvider with prompt building, response parsing, and fixed fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Coaching advisor
//!
//! Two generation calls per "today" flow: task suggestions when the
//! dashboard renders (cached per user per session by the caller) and one
//! encouragement comment after the report is submitted. Both are
//! best-effort — any provider failure substitutes the fixed fallback and
//! the flow continues.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::warn;

use crate::constants::{FALLBACK_COMMENT, FALLBACK_TASKS, MAX_DAILY_TASKS};
use crate::llm::TextProvider;
use crate::models::Profile;

/// Leading characters stripped from generated task lines.
const BULLET_MARKERS: [char; 5] = ['-', '*', '・', '•', '·'];

/// Parse a generated response into task strings: split on line breaks,
/// strip bullet markers and list numbering, keep the first
/// [`MAX_DAILY_TASKS`] non-empty lines.
#[must_use]
pub fn parse_task_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(MAX_DAILY_TASKS)
        .map(str::to_owned)
        .collect()
}

/// Strip one leading bullet marker or `1.` / `1)` style numbering.
fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim();
    let without_bullet = trimmed.trim_start_matches(BULLET_MARKERS).trim_start();

    let digits = without_bullet
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits > 0 {
        let rest = &without_bullet[digits..];
        if let Some(stripped) = rest.strip_prefix(['.', ')', '、']) {
            return stripped.trim_start();
        }
    }
    without_bullet
}

/// AI coaching advisor.
pub struct CoachingAdvisor {
    provider: Arc<dyn TextProvider>,
}

impl CoachingAdvisor {
    /// Create an advisor over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate up to four short daily task suggestions for a user.
    ///
    /// Never fails: any provider error or empty parse yields the fixed
    /// default list.
    pub async fn suggest_tasks(&self, profile: &Profile) -> Vec<String> {
        let prompt = format!(
            "あなたはバスケットボールコーチ「{coach}」です。\n\
             目標「{goal}」に向けた今日の練習タスクを{count}つ、\
             各15文字以内で一行ずつ出力してください。説明は不要です。",
            coach = profile.coach_name,
            goal = profile.goal_or_placeholder(),
            count = MAX_DAILY_TASKS,
        );

        match self.provider.complete(&prompt).await {
            Ok(response) => {
                let tasks = parse_task_lines(&response);
                if tasks.is_empty() {
                    warn!(
                        target: "courtside::advisor",
                        provider = self.provider.name(),
                        "task generation returned no usable lines, using defaults"
                    );
                    default_tasks()
                } else {
                    tasks
                }
            }
            Err(e) => {
                warn!(
                    target: "courtside::advisor",
                    provider = self.provider.name(),
                    error = %e,
                    "task generation failed, using defaults"
                );
                default_tasks()
            }
        }
    }

    /// Generate one short coaching comment for a submitted report.
    ///
    /// Never fails: any provider error yields the fixed encouragement.
    pub async fn encourage(
        &self,
        profile: &Profile,
        achievement: i64,
        metrics: &[(String, f64)],
        note: &str,
    ) -> String {
        let mut prompt = format!(
            "あなたはバスケットボールコーチ「{coach}」です。\n\
             今日の達成度は{achievement}%でした。\n",
            coach = profile.coach_name,
        );
        for (name, value) in metrics {
            let _ = writeln!(prompt, "記録: {name} = {value}");
        }
        if !note.trim().is_empty() {
            let _ = writeln!(prompt, "メモ: {note}");
        }
        prompt.push_str("選手への短い励ましコメントを一つだけ返してください。");

        match self.provider.complete(&prompt).await {
            Ok(response) => {
                let comment = response.trim();
                if comment.is_empty() {
                    FALLBACK_COMMENT.to_owned()
                } else {
                    comment.to_owned()
                }
            }
            Err(e) => {
                warn!(
                    target: "courtside::advisor",
                    provider = self.provider.name(),
                    error = %e,
                    "comment generation failed, using fallback"
                );
                FALLBACK_COMMENT.to_owned()
            }
        }
    }
}

fn default_tasks() -> Vec<String> {
    FALLBACK_TASKS.iter().map(|&t| t.to_owned()).collect()
}

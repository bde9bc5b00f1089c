// ABOUTME: Application constants for worksheet names, fixed labels, and fallbacks
// ABOUTME: Centralizes the spreadsheet data contract shared with the original deployment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Application constants
//!
//! The worksheet names and the fixed metric label are the data contract of
//! the shared spreadsheet; the Japanese strings match the rows the original
//! deployment already wrote and must not be translated.

/// Worksheet holding one profile row per user.
pub const PROFILES_SHEET: &str = "Profiles";

/// Worksheet holding append-only metric entries.
pub const METRICS_SHEET: &str = "Metrics";

/// Worksheet holding append-only daily history rows.
pub const HISTORY_SHEET: &str = "History";

/// Fixed metric label for the daily achievement summary row.
pub const ACHIEVEMENT_METRIC: &str = "達成度";

/// Number of days shown on the dashboard calendar, ending today.
pub const CALENDAR_DAYS: usize = 14;

/// Maximum number of AI-suggested daily tasks.
pub const MAX_DAILY_TASKS: usize = 4;

/// Default memoization TTL for datastore reads, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5;

/// Fallback task list used whenever task generation fails.
pub const FALLBACK_TASKS: [&str; MAX_DAILY_TASKS] = [
    "ドリブル練習10分",
    "シュート50本",
    "体幹トレーニング",
    "ストレッチ",
];

/// Fallback encouragement used whenever comment generation fails.
pub const FALLBACK_COMMENT: &str = "今日もよく頑張りました。明日も続けましょう!";

/// Placeholder shown when a history row has no stored comment.
pub const MISSING_COMMENT_PLACEHOLDER: &str = "(コメントなし)";

/// Placeholder shown when a profile has no goal set.
pub const MISSING_GOAL_PLACEHOLDER: &str = "(目標未設定)";

/// Calendar icon for a day with no entry or zero achievement.
pub const ICON_LOW: &str = "😴";

/// Calendar icon for partial achievement (between 0 and 100).
pub const ICON_MID: &str = "🙂";

/// Calendar icon for full achievement (100 or above).
pub const ICON_HIGH: &str = "🔥";

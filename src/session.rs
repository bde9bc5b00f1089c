// ABOUTME: Per-interactive-session selection state keyed by explicit session id
// ABOUTME: Tracks selected user, selected calendar date, and the cached task list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Session state
//!
//! Each interactive session (one browser tab, one `x-session-id`) owns an
//! isolated [`SessionState`]. The generated task list is cached here per
//! user per session so a rerun does not trigger a second generation call.
//! State is never shared across sessions or keyed by user globally.

use chrono::NaiveDate;
use dashmap::DashMap;

/// Mutable state of one interactive session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Selected user, `None` until the selector is used
    pub user_id: Option<String>,
    /// Selected calendar date; defaults to today
    pub selected_date: NaiveDate,
    /// Task list generated for the selected user, cached for the session
    pub tasks: Option<Vec<String>>,
}

impl SessionState {
    fn new(today: NaiveDate) -> Self {
        Self {
            user_id: None,
            selected_date: today,
            tasks: None,
        }
    }
}

/// Registry of live sessions.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionState>,
}

impl SessionManager {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a session, creating it (dated today) on first use.
    #[must_use]
    pub fn state(&self, session_id: &str, today: NaiveDate) -> SessionState {
        self.sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| SessionState::new(today))
            .clone()
    }

    /// Select a user. Switching users clears the cached task list (new
    /// tasks must regenerate for the new user) but keeps the selected date.
    pub fn select_user(&self, session_id: &str, today: NaiveDate, user_id: &str) {
        let mut entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| SessionState::new(today));
        if entry.user_id.as_deref() != Some(user_id) {
            entry.tasks = None;
        }
        entry.user_id = Some(user_id.to_owned());
    }

    /// Select a calendar date; the cached task list is untouched.
    pub fn select_date(&self, session_id: &str, today: NaiveDate, date: NaiveDate) {
        let mut entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| SessionState::new(today));
        entry.selected_date = date;
    }

    /// Cache the generated task list for a session.
    pub fn cache_tasks(&self, session_id: &str, today: NaiveDate, tasks: Vec<String>) {
        let mut entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| SessionState::new(today));
        entry.tasks = Some(tasks);
    }
}

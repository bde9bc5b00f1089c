// ABOUTME: Daily flow controller: calendar, achievement math, report submission
// ABOUTME: Orchestrates session state, the datastore, and the coaching advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Daily flow controller
//!
//! Drives the dashboard state machine: `SELECTING_USER → VIEWING_TODAY`
//! by default, with `VIEWING_TODAY ⇄ VIEWING_PAST_DATE` toggled by
//! calendar selection. The pure calendar/achievement helpers take explicit
//! dates so they stay testable; [`DashboardService`] binds them to the
//! store, the advisor, and session state.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisor::CoachingAdvisor;
use crate::constants::{
    ACHIEVEMENT_METRIC, CALENDAR_DAYS, ICON_HIGH, ICON_LOW, ICON_MID,
    MISSING_COMMENT_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::models::{is_missing_value, HistoryEntry, MetricEntry, Profile};
use crate::session::SessionManager;
use crate::store::{CachedStore, Snapshot, TableStore};

// ============================================================================
// Pure helpers
// ============================================================================

/// Achievement percent for a day: `round(checked / total × 100)`.
///
/// A day with no tasks counts as zero achievement.
#[must_use]
pub fn achievement_percent(checked: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    (checked as f64 / total as f64 * 100.0).round() as i64
}

/// Calendar icon tier for one day's achievement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    /// No entry, or a value at or below zero
    Low,
    /// Partial achievement, strictly between 0 and 100
    Mid,
    /// Full achievement, 100 or above
    High,
}

impl AchievementTier {
    /// Map a day's achievement value (absent for no entry) to a tier.
    #[must_use]
    pub fn from_value(value: Option<f64>) -> Self {
        match value {
            Some(v) if v >= 100.0 => Self::High,
            Some(v) if v > 0.0 => Self::Mid,
            _ => Self::Low,
        }
    }

    /// Display icon for the tier.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Low => ICON_LOW,
            Self::Mid => ICON_MID,
            Self::High => ICON_HIGH,
        }
    }
}

/// The calendar window: the most recent [`CALENDAR_DAYS`] days ending
/// `today`, oldest first.
#[must_use]
pub fn calendar_window(today: NaiveDate) -> Vec<NaiveDate> {
    (0..CALENDAR_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(chrono::Days::new(back as u64)))
        .collect()
}

/// A user's achievement value for one day, if recorded.
///
/// Duplicate (user, date, metric) rows resolve most-recent-wins: rows are
/// append-only, so the last stored match is the latest write.
#[must_use]
pub fn achievement_for_day(metrics: &[MetricEntry], user_id: &str, date: NaiveDate) -> Option<f64> {
    metrics
        .iter()
        .rev()
        .find(|m| m.user_id == user_id && m.date == date && m.metric_name == ACHIEVEMENT_METRIC)
        .map(|m| m.value)
}

// ============================================================================
// View models
// ============================================================================

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// No user selected yet
    SelectingUser,
    /// Today's checklist and metric entry
    ViewingToday,
    /// Read-only review of a past date
    ViewingPastDate,
}

/// One cell of the 14-day calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Achievement tier for the day
    pub tier: AchievementTier,
    /// Display icon for the tier
    pub icon: String,
    /// Whether this cell is the selected date
    pub selected: bool,
    /// Whether this cell is today
    pub is_today: bool,
}

/// Profile panel contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePanel {
    /// User identifier
    pub user_id: String,
    /// Coach persona name
    pub coach_name: String,
    /// Goal text with placeholder when unset
    pub goal: String,
    /// Tracked metric names
    pub tracked_metrics: Vec<String>,
}

impl ProfilePanel {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            coach_name: profile.coach_name.clone(),
            goal: profile.goal_or_placeholder().to_owned(),
            tracked_metrics: profile.metric_names(),
        }
    }
}

/// Today's interactive checklist and metric inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayView {
    /// AI-suggested tasks, at most four
    pub tasks: Vec<String>,
    /// Metric names to render numeric inputs for
    pub tracked_metrics: Vec<String>,
}

/// One listed metric row in the past-date review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastMetric {
    /// Metric name
    pub metric_name: String,
    /// Recorded value
    pub value: f64,
}

/// Read-only review of a past date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastView {
    /// Reviewed date
    pub date: NaiveDate,
    /// Whether the day has no recorded metrics at all
    pub empty: bool,
    /// Metric rows for the day, storage order
    pub entries: Vec<PastMetric>,
    /// Coach comment, placeholder when the history row has none;
    /// absent when the day has no history row
    pub coach_comment: Option<String>,
    /// Free note, only when present and not a missing-value marker
    pub free_text: Option<String>,
}

/// Full dashboard view returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// Current state-machine position
    pub state: ViewState,
    /// Profile panel, absent while selecting a user
    pub profile: Option<ProfilePanel>,
    /// 14-day calendar, oldest first; empty while selecting a user
    pub calendar: Vec<CalendarDay>,
    /// Today's checklist, present in `ViewingToday`
    pub today: Option<TodayView>,
    /// Past-day review, present in `ViewingPastDate`
    pub past: Option<PastView>,
}

/// Profile settings update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// User whose profile row is edited
    pub user_id: String,
    /// New coach persona name
    pub coach_name: String,
    /// New goal text
    pub goal: String,
    /// New comma-separated tracked metric names
    pub tracked_metrics: String,
}

/// One entered metric value in a report submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    /// Metric name
    pub name: String,
    /// Entered value; zeros are persisted like any other value
    pub value: f64,
}

/// Today's report submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Checked flag per task, same order as the rendered checklist
    pub checked: Vec<bool>,
    /// Entered metric values
    pub metrics: Vec<MetricValue>,
    /// Free-text note
    #[serde(default)]
    pub note: String,
}

/// Result of a report submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutcome {
    /// Report date (today)
    pub date: NaiveDate,
    /// Computed achievement percent
    pub achievement: i64,
    /// Generated (or fallback) coaching comment
    pub comment: String,
}

// ============================================================================
// Service
// ============================================================================

/// The daily flow controller bound to its collaborators.
pub struct DashboardService {
    store: Arc<CachedStore>,
    advisor: Arc<CoachingAdvisor>,
    sessions: Arc<SessionManager>,
}

impl DashboardService {
    /// Create the service.
    #[must_use]
    pub fn new(
        store: Arc<CachedStore>,
        advisor: Arc<CoachingAdvisor>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            store,
            advisor,
            sessions,
        }
    }

    /// Today's date in the server's local timezone.
    #[must_use]
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// All profiles, for the user selector.
    ///
    /// # Errors
    ///
    /// Returns a datastore error when the load fails.
    pub async fn profiles(&self) -> AppResult<Vec<Profile>> {
        Ok(self.store.load().await?.profiles)
    }

    /// Select a user for the session. Resets the cached task list when the
    /// user changes; the selected date stays.
    ///
    /// # Errors
    ///
    /// Returns not-found when the user has no profile row, or a datastore
    /// error when the load fails.
    pub async fn select_user(&self, session_id: &str, user_id: &str) -> AppResult<()> {
        let snapshot = self.store.load().await?;
        if snapshot.profile(user_id).is_none() {
            return Err(AppError::not_found(format!("user {user_id}")));
        }
        self.sessions.select_user(session_id, Self::today(), user_id);
        Ok(())
    }

    /// Select a calendar date for the session.
    pub fn select_date(&self, session_id: &str, date: NaiveDate) {
        self.sessions.select_date(session_id, Self::today(), date);
    }

    /// Render the dashboard for a session.
    ///
    /// # Errors
    ///
    /// Returns a datastore error when the load fails — the dashboard is
    /// never partially rendered over a failed load.
    pub async fn view(&self, session_id: &str) -> AppResult<DashboardView> {
        let today = Self::today();
        let session = self.sessions.state(session_id, today);

        let Some(user_id) = session.user_id.clone() else {
            return Ok(DashboardView {
                state: ViewState::SelectingUser,
                profile: None,
                calendar: Vec::new(),
                today: None,
                past: None,
            });
        };

        let snapshot = self.store.load().await?;
        let profile = snapshot
            .profile(&user_id)
            .ok_or_else(|| AppError::not_found(format!("user {user_id}")))?
            .clone();

        let calendar =
            Self::render_calendar(&snapshot, &user_id, today, session.selected_date);

        if session.selected_date == today {
            let tasks = match session.tasks {
                Some(tasks) => tasks,
                None => {
                    let generated = self.advisor.suggest_tasks(&profile).await;
                    self.sessions
                        .cache_tasks(session_id, today, generated.clone());
                    generated
                }
            };
            Ok(DashboardView {
                state: ViewState::ViewingToday,
                profile: Some(ProfilePanel::from_profile(&profile)),
                calendar,
                today: Some(TodayView {
                    tasks,
                    tracked_metrics: profile.metric_names(),
                }),
                past: None,
            })
        } else {
            Ok(DashboardView {
                state: ViewState::ViewingPastDate,
                profile: Some(ProfilePanel::from_profile(&profile)),
                calendar,
                today: None,
                past: Some(Self::render_past_day(
                    &snapshot,
                    &user_id,
                    session.selected_date,
                )),
            })
        }
    }

    fn render_calendar(
        snapshot: &Snapshot,
        user_id: &str,
        today: NaiveDate,
        selected: NaiveDate,
    ) -> Vec<CalendarDay> {
        calendar_window(today)
            .into_iter()
            .map(|date| {
                let tier = AchievementTier::from_value(achievement_for_day(
                    &snapshot.metrics,
                    user_id,
                    date,
                ));
                CalendarDay {
                    date,
                    tier,
                    icon: tier.icon().to_owned(),
                    selected: date == selected,
                    is_today: date == today,
                }
            })
            .collect()
    }

    /// Read-only review of one past day.
    fn render_past_day(snapshot: &Snapshot, user_id: &str, date: NaiveDate) -> PastView {
        let entries: Vec<PastMetric> = snapshot
            .metrics
            .iter()
            .filter(|m| m.user_id == user_id && m.date == date)
            .map(|m| PastMetric {
                metric_name: m.metric_name.clone(),
                value: m.value,
            })
            .collect();

        if entries.is_empty() {
            return PastView {
                date,
                empty: true,
                entries,
                coach_comment: None,
                free_text: None,
            };
        }

        // Most-recent-wins over possible duplicate daily rows.
        let history: Option<&HistoryEntry> = snapshot
            .history
            .iter()
            .rev()
            .find(|h| h.user_id == user_id && h.date == date);

        let coach_comment = history.map(|h| {
            if is_missing_value(&h.coach_comment) {
                MISSING_COMMENT_PLACEHOLDER.to_owned()
            } else {
                h.coach_comment.clone()
            }
        });
        let free_text = history
            .map(|h| h.free_text.clone())
            .filter(|note| !is_missing_value(note));

        PastView {
            date,
            empty: false,
            entries,
            coach_comment,
            free_text,
        }
    }

    /// Persist a profile edit and return the freshly loaded row.
    ///
    /// The full `Profiles` worksheet is rewritten (edit in place); the
    /// store invalidates its memo as part of the write.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown user, or a datastore error when
    /// the load or write fails — a failed write leaves prior data intact.
    pub async fn save_profile(&self, update: ProfileUpdate) -> AppResult<Profile> {
        let mut profiles = self.store.load().await?.profiles;
        let row = profiles
            .iter_mut()
            .find(|p| p.user_id == update.user_id)
            .ok_or_else(|| AppError::not_found(format!("user {}", update.user_id)))?;
        row.coach_name = update.coach_name;
        row.goal = update.goal;
        row.tracked_metrics = update.tracked_metrics;

        self.store.persist_profiles(&profiles).await?;
        info!(target: "courtside::dashboard", user_id = %update.user_id, "profile saved");

        self.store
            .load()
            .await?
            .profile(&update.user_id)
            .cloned()
            .ok_or_else(|| AppError::internal("profile row vanished after save"))
    }

    /// Submit today's report: compute achievement, generate the coaching
    /// comment, and append the day's rows.
    ///
    /// Appends exactly `1 + metrics.len()` metric rows (the achievement
    /// summary plus every entered metric, zeros included) and exactly one
    /// history row. Each persist rewrites the full worksheet and
    /// invalidates the read memo.
    ///
    /// # Errors
    ///
    /// Returns invalid-input when no user is selected, when the selected
    /// date is not today, or when the checklist shape does not match the
    /// session's task list; a datastore error when a load or write fails.
    pub async fn submit_report(
        &self,
        session_id: &str,
        request: ReportRequest,
    ) -> AppResult<ReportOutcome> {
        let today = Self::today();
        let session = self.sessions.state(session_id, today);

        let user_id = session
            .user_id
            .clone()
            .ok_or_else(|| AppError::invalid_input("no user selected"))?;
        if session.selected_date != today {
            return Err(AppError::invalid_input(
                "reports can only be submitted for today",
            ));
        }

        let tasks = session
            .tasks
            .ok_or_else(|| AppError::invalid_input("no task list generated for this session"))?;
        if request.checked.len() != tasks.len() {
            return Err(AppError::invalid_input(format!(
                "checklist has {} entries but {} tasks were suggested",
                request.checked.len(),
                tasks.len()
            )));
        }

        let checked = request.checked.iter().filter(|&&c| c).count();
        let achievement = achievement_percent(checked, tasks.len());

        let snapshot = self.store.load().await?;
        let profile = snapshot
            .profile(&user_id)
            .ok_or_else(|| AppError::not_found(format!("user {user_id}")))?
            .clone();

        let entered: Vec<(String, f64)> = request
            .metrics
            .iter()
            .map(|m| (m.name.clone(), m.value))
            .collect();
        let comment = self
            .advisor
            .encourage(&profile, achievement, &entered, &request.note)
            .await;

        let mut metrics = snapshot.metrics;
        metrics.push(MetricEntry {
            user_id: user_id.clone(),
            date: today,
            metric_name: ACHIEVEMENT_METRIC.to_owned(),
            value: achievement as f64,
        });
        for value in &request.metrics {
            metrics.push(MetricEntry {
                user_id: user_id.clone(),
                date: today,
                metric_name: value.name.clone(),
                value: value.value,
            });
        }

        let mut history = snapshot.history;
        history.push(HistoryEntry {
            user_id: user_id.clone(),
            date: today,
            metric_name: ACHIEVEMENT_METRIC.to_owned(),
            value: achievement as f64,
            coach_comment: comment.clone(),
            free_text: request.note,
        });

        self.store.persist_metrics(&metrics).await?;
        self.store.persist_history(&history).await?;

        info!(
            target: "courtside::dashboard",
            user_id = %user_id,
            achievement,
            metric_rows = request.metrics.len() + 1,
            "daily report submitted"
        );

        Ok(ReportOutcome {
            date: today,
            achievement,
            comment,
        })
    }
}

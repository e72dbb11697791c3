//! Aggregate dashboard payloads served by `/dashboard`.

use super::project::{DeadlineStatus, ProjectStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One recent status transition, flattened for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub project_id: i64,
    pub project_title: String,
    pub old_status: ProjectStatus,
    pub new_status: ProjectStatus,
    pub changed_at: NaiveDateTime,
    /// Username of whoever made the change
    pub changed_by: String,
}

/// A project deadline the backend considers worth surfacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDeadline {
    pub project_id: i64,
    pub project_title: String,
    pub deadline: NaiveDate,
    /// Negative once the deadline has passed
    pub days_until_deadline: i64,
    pub status: DeadlineStatus,
}

/// Aggregate statistics for the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_projects: i64,
    pub pending_reviews: i64,
    pub recent_status_changes: Vec<StatusChange>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}

/// Reduced user reference carried inside a summary (no email)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Per-user rollup served by `/dashboard/user-summary/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user: UserBrief,
    pub project_count: i64,
    pub review_count: i64,
}

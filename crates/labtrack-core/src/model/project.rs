//! Project entities as the backend serves them.
//!
//! Field names follow the backend's camelCase JSON; dates are ISO-8601
//! calendar dates and timestamps are ISO-8601 datetimes without an offset.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    /// All statuses, in display order.
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    /// Wire name of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "PENDING",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::OnHold => "ON_HOLD",
            ProjectStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse from a wire name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Some(ProjectStatus::Pending),
            "IN_PROGRESS" => Some(ProjectStatus::InProgress),
            "COMPLETED" => Some(ProjectStatus::Completed),
            "ON_HOLD" => Some(ProjectStatus::OnHold),
            "CANCELLED" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProjectStatus::parse(s).ok_or_else(|| format!("unknown project status '{s}'"))
    }
}

/// Deadline classification, computed by the backend whenever a project is
/// saved. `NoDeadline` holds exactly when the project has no deadline date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeadlineStatus {
    #[default]
    NoDeadline,
    OnTrack,
    Approaching,
    Overdue,
}

impl DeadlineStatus {
    /// All classifications, in display order.
    pub const ALL: [DeadlineStatus; 4] = [
        DeadlineStatus::NoDeadline,
        DeadlineStatus::OnTrack,
        DeadlineStatus::Approaching,
        DeadlineStatus::Overdue,
    ];

    /// Wire name of this classification
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineStatus::NoDeadline => "NO_DEADLINE",
            DeadlineStatus::OnTrack => "ON_TRACK",
            DeadlineStatus::Approaching => "APPROACHING",
            DeadlineStatus::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user, embedded by value wherever the backend references one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Deadline tracking as a tagged view: either the project has no deadline,
/// or it has a date together with the backend's classification of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    NoDeadline,
    Tracked {
        date: NaiveDate,
        status: DeadlineStatus,
    },
}

/// A research project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend-assigned identifier, immutable after creation
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    /// Expected, but not enforced, to be on or after `start_date`
    pub end_date: NaiveDate,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub deadline_status: DeadlineStatus,
    pub owner: User,
    /// Backend-owned reminder flag; the client never mutates it
    #[serde(default)]
    pub reminder_sent: bool,
    /// Server-assigned, read-only
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Server-assigned, read-only
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Project {
    /// Deadline tracking for this project as a tagged state, so that
    /// "no deadline" cannot be paired with a stray classification.
    pub fn deadline_state(&self) -> DeadlineState {
        match self.deadline {
            None => DeadlineState::NoDeadline,
            Some(date) => DeadlineState::Tracked {
                date,
                status: self.deadline_status,
            },
        }
    }
}

/// Append-only record of a status transition, written by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistory {
    pub id: i64,
    pub project_id: i64,
    pub old_status: ProjectStatus,
    pub new_status: ProjectStatus,
    pub changed_at: NaiveDateTime,
    pub changed_by: User,
}

/// Create payload for a new project: no id, owner, or timestamps. The
/// backend fills those in and returns the full entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl ProjectDraft {
    /// Client-side validation, run before any network call
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if self.end_date < self.start_date {
            // Tolerated by the backend; surfaced for the operator only.
            warn!(
                start_date = %self.start_date,
                end_date = %self.end_date,
                "end date is before start date"
            );
        }
        Ok(())
    }
}

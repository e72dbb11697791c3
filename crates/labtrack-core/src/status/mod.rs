//! Status and deadline display classification
//!
//! Single source of truth for the status color tables that the original
//! views each carried a private copy of. Everything here is a total, pure
//! function over the closed enums; rendering decides what a color means.

use chrono::NaiveDate;

use crate::model::{DeadlineStatus, ProjectStatus};

/// Days before a deadline at which it counts as approaching
const APPROACHING_WINDOW_DAYS: i64 = 7;

/// Display severity for a status chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Success,
    Info,
    Warning,
    Error,
    /// Neutral fallback
    #[default]
    Default,
}

impl Color {
    /// Hex value from the application palette
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Success => "#66BB6A",
            Color::Info => "#42A5F5",
            Color::Warning => "#FFA726",
            Color::Error => "#EF5350",
            Color::Default => "#E0E0E0",
        }
    }
}

/// Display color for a project status
pub fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Pending => Color::Warning,
        ProjectStatus::InProgress => Color::Info,
        ProjectStatus::Completed => Color::Success,
        ProjectStatus::OnHold => Color::Warning,
        ProjectStatus::Cancelled => Color::Error,
    }
}

/// Display color for a deadline classification
pub fn deadline_color(status: DeadlineStatus) -> Color {
    match status {
        DeadlineStatus::OnTrack => Color::Success,
        DeadlineStatus::Approaching => Color::Warning,
        DeadlineStatus::Overdue => Color::Error,
        DeadlineStatus::NoDeadline => Color::Default,
    }
}

/// Classify a deadline date relative to `today`, using the same thresholds
/// the backend applies when it saves a project: past dates are overdue,
/// anything within a week is approaching, the rest is on track.
///
/// The server-computed classification on an entity stays authoritative;
/// this exists for display-side recomputation of dashboard rows.
pub fn classify_deadline(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    let Some(deadline) = deadline else {
        return DeadlineStatus::NoDeadline;
    };

    let days_until = (deadline - today).num_days();
    if days_until < 0 {
        DeadlineStatus::Overdue
    } else if days_until <= APPROACHING_WINDOW_DAYS {
        DeadlineStatus::Approaching
    } else {
        DeadlineStatus::OnTrack
    }
}

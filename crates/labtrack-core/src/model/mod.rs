//! Wire-level data model shared by the gateway and the stores.

pub mod dashboard;
pub mod project;

pub use dashboard::{DashboardStats, StatusChange, UpcomingDeadline, UserBrief, UserSummary};
pub use project::{
    DeadlineState, DeadlineStatus, Project, ProjectDraft, ProjectStatus, StatusHistory, User,
};

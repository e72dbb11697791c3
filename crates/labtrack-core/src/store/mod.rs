//! Client-side stores: the authoritative in-memory cache plus the
//! command/query surface for one resource family each.
//!
//! Both stores share the same lifecycle: Idle, then Loading on every
//! command, resolving to Ready or Failed; neither terminal state is final.
//! Commands record failures as a human-readable string in state rather than
//! returning errors, mirroring how the views consume them.

pub mod dashboard;
pub mod projects;

pub use dashboard::{DashboardState, DashboardStore};
pub use projects::{ProjectStore, ProjectsState, StatusFilter, filter_projects};

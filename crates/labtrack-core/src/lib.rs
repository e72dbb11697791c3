//! Labtrack Core Library
//!
//! Client-side core for the research project tracking backend:
//! - Gateway (the sole module performing network I/O)
//! - Stores (projects, dashboard) with filtering and request fencing
//! - Wire data model (projects, users, status history, dashboard payloads)
//! - Status/deadline display classification
//! - Configuration with file persistence

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod reviews;
pub mod status;
pub mod store;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::gateway::Gateway;
    pub use crate::model::{Project, ProjectDraft, ProjectStatus};
    pub use crate::store::{DashboardStore, ProjectStore, StatusFilter};
}

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod gateway_tests;
#[cfg(test)]
mod model_tests;

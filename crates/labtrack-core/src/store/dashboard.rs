//! Dashboard store
//!
//! One composite command fetches the aggregate statistics and the user
//! summary concurrently; the operation fails as a whole if either leg
//! fails. Same lifecycle and fencing as the project store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::gateway::Gateway;
use crate::model::{DashboardStats, UserSummary};

/// Snapshot of the dashboard store's state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub user_summary: Option<UserSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Command/query surface for the dashboard aggregates
#[derive(Debug, Clone)]
pub struct DashboardStore {
    gateway: Gateway,
    user_id: i64,
    state: Arc<Mutex<DashboardState>>,
    seq: Arc<AtomicU64>,
}

impl DashboardStore {
    /// Create a store over the given gateway, summarizing `user_id`
    pub fn new(gateway: Gateway, user_id: i64) -> Self {
        Self {
            gateway,
            user_id,
            state: Arc::new(Mutex::new(DashboardState::default())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A clone of the current state
    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Fetch stats and the user summary concurrently and store both
    pub async fn fetch_dashboard_data(&self) {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.is_loading = true;
            state.error = None;
        }

        let summary_path = format!("/dashboard/user-summary/{}", self.user_id);
        let outcome = tokio::try_join!(
            self.gateway.get::<DashboardStats>("/dashboard"),
            self.gateway.get::<UserSummary>(&summary_path),
        );

        let mut state = self.state.lock().await;
        if ticket != self.seq.load(Ordering::SeqCst) {
            debug!(ticket, "discarding superseded dashboard response");
            return;
        }
        state.is_loading = false;
        match outcome {
            Ok((stats, user_summary)) => {
                debug!(
                    active_projects = stats.active_projects,
                    "fetched dashboard data"
                );
                state.stats = Some(stats);
                state.user_summary = Some(user_summary);
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch dashboard data");
                state.error = Some(e.to_string());
            }
        }
    }
}

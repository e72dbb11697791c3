//! Project store
//!
//! Holds the authoritative in-memory project list, the current status
//! filter and search term, and the loading/error flags. Commands issue
//! gateway calls and transition the shared state when their response
//! arrives; the filtered view is recomputed from state on every read and
//! never mutates it.
//!
//! Multiple commands may be in flight at once. Each network command draws a
//! ticket from a per-store monotone counter and its completion is applied
//! only while that ticket is still the newest issued; superseded responses
//! are dropped. This turns the raw last-resolved-wins race into
//! last-issued-wins.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::gateway::Gateway;
use crate::model::{Project, ProjectDraft, ProjectStatus, StatusHistory};

/// Status filter: a concrete status or the `ALL` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Whether a project with the given status passes this filter
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Parse `"ALL"` or any status wire name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ALL") {
            Some(StatusFilter::All)
        } else {
            ProjectStatus::parse(s).map(StatusFilter::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("ALL"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StatusFilter::parse(s).ok_or_else(|| format!("unknown status filter '{s}'"))
    }
}

/// Snapshot of the project store's state
#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_filter: StatusFilter,
    pub search_term: String,
}

impl ProjectsState {
    /// The derived filtered view: a pure projection of this snapshot
    pub fn filtered(&self) -> Vec<Project> {
        filter_projects(&self.items, self.status_filter, &self.search_term)
    }

    /// Look up a project by id
    pub fn find(&self, id: i64) -> Option<&Project> {
        self.items.iter().find(|p| p.id == id)
    }
}

/// Filter projects by status and by case-insensitive substring match of
/// `term` against title or description. An empty term matches everything.
pub fn filter_projects(items: &[Project], filter: StatusFilter, term: &str) -> Vec<Project> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|project| {
            filter.matches(project.status)
                && (project.title.to_lowercase().contains(&needle)
                    || project.description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Replace the entry with a matching id, or append
fn upsert(items: &mut Vec<Project>, project: Project) {
    match items.iter_mut().find(|p| p.id == project.id) {
        Some(entry) => *entry = project,
        None => items.push(project),
    }
}

/// Command/query surface over the project collection
///
/// Cheap to clone; clones share state, so a view layer can hand copies to
/// independent tasks.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    gateway: Gateway,
    state: Arc<Mutex<ProjectsState>>,
    seq: Arc<AtomicU64>,
}

impl ProjectStore {
    /// Create a store over the given gateway
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(ProjectsState::default())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A clone of the current state
    pub async fn snapshot(&self) -> ProjectsState {
        self.state.lock().await.clone()
    }

    /// The derived filtered view of the current state
    pub async fn filtered_projects(&self) -> Vec<Project> {
        self.state.lock().await.filtered()
    }

    /// Start a command: mark Loading, clear the error, take a ticket
    async fn begin(&self) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock().await;
        state.is_loading = true;
        state.error = None;
        ticket
    }

    /// Apply a command's outcome unless a newer command has been issued
    async fn finish<T>(
        &self,
        ticket: u64,
        command: &'static str,
        outcome: Result<T>,
        apply: impl FnOnce(&mut ProjectsState, T),
    ) {
        let mut state = self.state.lock().await;
        if ticket != self.seq.load(Ordering::SeqCst) {
            debug!(command, ticket, "discarding superseded response");
            return;
        }
        state.is_loading = false;
        match outcome {
            Ok(value) => apply(&mut state, value),
            Err(e) => {
                warn!(command, error = %e, "command failed");
                state.error = Some(e.to_string());
            }
        }
    }

    /// Fetch the full project list, replacing `items` wholesale on success.
    /// On failure, items from the last successful fetch are preserved so a
    /// transient error never flashes an empty list.
    pub async fn fetch_all(&self) {
        let ticket = self.begin().await;
        let outcome = self.gateway.get::<Vec<Project>>("/projects").await;
        self.finish(ticket, "fetch_all", outcome, |state, items| {
            debug!(count = items.len(), "fetched projects");
            state.items = items;
        })
        .await;
    }

    /// Fetch one project and upsert it into `items`
    pub async fn fetch_by_id(&self, id: i64) {
        let ticket = self.begin().await;
        let outcome = self.gateway.get::<Project>(&format!("/projects/{id}")).await;
        self.finish(ticket, "fetch_by_id", outcome, |state, project| {
            upsert(&mut state.items, project);
        })
        .await;
    }

    /// Post a draft; the backend's fully populated entity is appended
    pub async fn create(&self, draft: &ProjectDraft) {
        let ticket = self.begin().await;
        let outcome = match draft.validate() {
            Ok(()) => self.gateway.post::<_, Project>("/projects", draft).await,
            Err(e) => Err(e),
        };
        self.finish(ticket, "create", outcome, |state, project| {
            info!(id = project.id, title = %project.title, "created project");
            state.items.push(project);
        })
        .await;
    }

    /// Put the full entity; replaces the matching entry, no-op when the id
    /// is unknown locally
    pub async fn update(&self, project: &Project) {
        let ticket = self.begin().await;
        let path = format!("/projects/{}", project.id);
        let outcome = self.gateway.put::<_, Project>(&path, project).await;
        self.finish(ticket, "update", outcome, |state, updated| {
            if let Some(entry) = state.items.iter_mut().find(|p| p.id == updated.id) {
                *entry = updated;
            }
        })
        .await;
    }

    /// Put a partial `{status}` payload; the backend returns the full
    /// entity (fresh deadline classification included) and writes the
    /// status history itself
    pub async fn update_status(&self, id: i64, status: ProjectStatus) {
        let ticket = self.begin().await;
        let body = json!({ "status": status });
        let outcome = self
            .gateway
            .put::<_, Project>(&format!("/projects/{id}"), &body)
            .await;
        self.finish(ticket, "update_status", outcome, |state, updated| {
            info!(id = updated.id, status = %updated.status, "updated project status");
            if let Some(entry) = state.items.iter_mut().find(|p| p.id == updated.id) {
                *entry = updated;
            }
        })
        .await;
    }

    /// Delete a project; the entry is removed only after the backend
    /// confirms, and kept untouched on failure
    pub async fn delete(&self, id: i64) {
        let ticket = self.begin().await;
        let outcome = self.gateway.delete(&format!("/projects/{id}")).await;
        self.finish(ticket, "delete", outcome, |state, ()| {
            info!(id, "deleted project");
            state.items.retain(|p| p.id != id);
        })
        .await;
    }

    /// Set the status filter; synchronous state update, no network call
    pub async fn set_status_filter(&self, filter: StatusFilter) {
        self.state.lock().await.status_filter = filter;
    }

    /// Set the search term; synchronous state update, no network call
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.lock().await.search_term = term.into();
    }

    /// Read a project's status history. Pass-through: the result is
    /// returned to the caller, not cached in store state.
    pub async fn status_history(&self, id: i64) -> Result<Vec<StatusHistory>> {
        self.gateway
            .get(&format!("/projects/{id}/status-history"))
            .await
    }
}

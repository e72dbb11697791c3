//! Peer-review pass-through
//!
//! Reviews are served and consumed as opaque JSON; the client renders
//! whatever the backend sends and never caches it, so there is no review
//! store. High-level async functions over the gateway, nothing more.

use serde_json::Value;

use crate::error::Result;
use crate::gateway::Gateway;

/// List all reviews
pub async fn list(gateway: &Gateway) -> Result<Vec<Value>> {
    gateway.get("/reviews").await
}

/// Get a review by id
pub async fn get(gateway: &Gateway, id: i64) -> Result<Value> {
    gateway.get(&format!("/reviews/{id}")).await
}

/// Submit an updated review body
pub async fn update(gateway: &Gateway, id: i64, review: &Value) -> Result<Value> {
    gateway.put(&format!("/reviews/{id}"), review).await
}

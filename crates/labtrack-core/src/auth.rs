//! Login and registration pass-through
//!
//! No real session is established: a successful login only flips a local
//! flag and the backend's auth payload is discarded. Registration returns
//! the created account as opaque JSON.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::gateway::Gateway;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Local authentication state
#[derive(Debug, Clone)]
pub struct Auth {
    gateway: Gateway,
    logged_in: bool,
}

impl Auth {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            logged_in: false,
        }
    }

    /// Post credentials; on success the opaque payload is discarded and
    /// the local flag is set
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let body = LoginRequest { username, password };
        let _payload: Value = self.gateway.post("/users/login", &body).await?;
        self.logged_in = true;
        info!(username, "logged in");
        Ok(())
    }

    /// Register a new account; returns the backend's response as-is
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        self.gateway.post("/users/register", request).await
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

//! Main engine REST API client.
//!
//! This module provides the primary [`EngineClient`] for interacting with the
//! engine's v4 REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: SSO login, token access and logout
//! - `inventory`: Collection listing and sub-resource queries
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - Requests are issued one at a time and never retried
//! - Every API call requires a prior successful [`EngineClient::login`]

pub mod builder;
mod inventory;
mod session;

use crate::auth::SessionManager;

/// Engine REST API client.
///
/// Owns a single HTTP connection pool and the SSO session token.
///
/// ```rust,ignore
/// use zvirt_client::{Credentials, EngineClient};
/// use secrecy::SecretString;
///
/// let mut client = EngineClient::builder()
///     .base_url("https://engine.example.com/ovirt-engine".to_string())
///     .credentials(Credentials {
///         username: "admin@internal".to_string(),
///         password: SecretString::new("secret".to_string().into()),
///     })
///     .build()?;
/// client.login().await?;
/// let vms = client.list_vms().await?;
/// client.logout().await?;
/// ```
#[derive(Debug)]
pub struct EngineClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl EngineClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EngineClientBuilder {
        builder::EngineClientBuilder::new()
    }

    /// Engine root URL, e.g. `https://engine.example.com/ovirt-engine`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

//! Client-level session management.
//!
//! # Invariants
//! - [`EngineClient::login`] must succeed before any API call
//! - [`EngineClient::logout`] consumes the client, so a session is closed at most once

use secrecy::ExposeSecret;
use tracing::debug;

use crate::client::EngineClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl EngineClient {
    /// Obtain an SSO access token with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the SSO endpoint rejects the credentials.
    pub async fn login(&mut self) -> Result<()> {
        let credentials = self.session_manager.credentials();
        let token = endpoints::request_token(
            &self.http,
            &self.base_url,
            &credentials.username,
            credentials.password.expose_secret(),
        )
        .await?;

        self.session_manager.set_access_token(token);
        debug!("SSO session opened");
        Ok(())
    }

    /// Whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.session_manager.bearer_token().is_some()
    }

    /// Current bearer token.
    pub(crate) fn auth_token(&self) -> Result<&str> {
        self.session_manager
            .bearer_token()
            .ok_or(ClientError::SessionExpired)
    }

    /// Revoke the SSO token and drop the client.
    ///
    /// A client that never logged in has nothing to revoke.
    pub async fn logout(mut self) -> Result<()> {
        let Some(token) = self.session_manager.take_access_token() else {
            return Ok(());
        };
        endpoints::logout(&self.http, &self.base_url, token.expose_secret()).await?;
        debug!("SSO session closed");
        Ok(())
    }
}

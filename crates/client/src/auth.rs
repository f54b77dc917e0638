//! Credentials and SSO session token management.

use secrecy::{ExposeSecret, SecretString};

/// Username/password pair used to request an SSO token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Holds the credentials and the SSO access token of the current session.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    access_token: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager with no token.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            access_token: None,
        }
    }

    /// Credentials used for login.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Store the token received from the SSO endpoint.
    pub fn set_access_token(&mut self, token: String) {
        self.access_token = Some(SecretString::new(token.into()));
    }

    /// Bearer token for API requests, if logged in.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret())
    }

    /// Remove and return the token so it can be revoked.
    pub fn take_access_token(&mut self) -> Option<SecretString> {
        self.access_token.take()
    }
}

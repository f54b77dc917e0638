//! Client builder for constructing [`EngineClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (TLS trust, timeout, redirects)
//!
//! # Invariants
//! - `base_url` and `credentials` must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - No request timeout is applied unless one is configured

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::{Credentials, SessionManager};
use crate::client::EngineClient;
use crate::error::{ClientError, Result};
use zvirt_config::{Config, constants::DEFAULT_MAX_REDIRECTS};

/// Builder for creating a new [`EngineClient`].
#[derive(Default)]
pub struct EngineClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    ca_file: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl EngineClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine root URL, e.g. `https://engine.example.com/ovirt-engine`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the SSO credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling TLS verification makes the connection vulnerable to
    /// man-in-the-middle attacks. Prefer [`Self::ca_file`] where the engine CA
    /// is available.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Trust the PEM certificates in `path` in addition to the system roots.
    pub fn ca_file(mut self, path: PathBuf) -> Self {
        self.ca_file = Some(path);
        self
    }

    /// Set the request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials {
            username: config.auth.username.clone(),
            password: config.auth.password.clone(),
        });
        self.skip_verify = config.connection.skip_verify;
        self.ca_file = config.connection.ca_file.clone();
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn load_certificates(path: &PathBuf) -> Result<Vec<reqwest::Certificate>> {
        let pem = std::fs::read(path).map_err(|e| {
            ClientError::TlsError(format!("cannot read CA file {}: {}", path.display(), e))
        })?;
        let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
            ClientError::TlsError(format!("invalid CA file {}: {}", path.display(), e))
        })?;
        if certs.is_empty() {
            return Err(ClientError::TlsError(format!(
                "no certificates found in {}",
                path.display()
            )));
        }
        Ok(certs)
    }

    /// Build the [`EngineClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `credentials` were not provided.
    /// Returns [`ClientError::TlsError`] if the CA file cannot be loaded.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<EngineClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if let Some(path) = &self.ca_file {
            for cert in Self::load_certificates(path)? {
                http_builder = http_builder.add_root_certificate(cert);
            }
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(EngineClient {
            http,
            base_url,
            session_manager: SessionManager::new(credentials),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, SecretString};
    use std::io::Write;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_credentials(
            "https://engine.example.com/ovirt-engine".to_string(),
            "admin@internal".to_string(),
            SecretString::new("password".to_string().into()),
        );
        config.connection.skip_verify = false;
        config.connection.timeout = Some(Duration::from_secs(120));

        let builder = EngineClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url.as_deref(),
            Some("https://engine.example.com/ovirt-engine")
        );
        assert!(!builder.skip_verify);
        assert_eq!(builder.timeout, Some(Duration::from_secs(120)));
        let credentials = builder.credentials.as_ref().unwrap();
        assert_eq!(credentials.username, "admin@internal");
        assert_eq!(credentials.password.expose_secret(), "password");
    }

    #[test]
    fn test_normalize_base_url_trailing_slashes() {
        assert_eq!(
            EngineClientBuilder::normalize_base_url(
                "https://engine.example.com/ovirt-engine//".to_string()
            ),
            "https://engine.example.com/ovirt-engine"
        );
    }

    #[test]
    fn test_missing_ca_file_is_tls_error() {
        let result = EngineClient::builder()
            .base_url("https://engine.example.com/ovirt-engine".to_string())
            .credentials(Credentials {
                username: "admin@internal".to_string(),
                password: SecretString::new("password".to_string().into()),
            })
            .ca_file(PathBuf::from("/nonexistent/zvirt-ca.pem"))
            .build();

        assert!(matches!(result, Err(ClientError::TlsError(_))));
    }

    #[test]
    fn test_ca_file_without_certificates_is_tls_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a certificate").unwrap();

        let result = EngineClientBuilder::load_certificates(&file.path().to_path_buf());
        assert!(matches!(result, Err(ClientError::TlsError(_))));
    }
}

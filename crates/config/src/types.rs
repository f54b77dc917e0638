//! Connection configuration types for zvirt-report.
//!
//! Responsibilities:
//! - Define connection settings (engine URL, TLS trust policy, timeout).
//! - Define the credentials used to open an SSO session.
//! - Provide a convenience constructor for tests and embedding.
//!
//! Does NOT handle:
//! - Configuration loading from env/.env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` is the engine root (e.g. `https://engine.example.com/ovirt-engine`)
//!   without a trailing slash.
//! - Passwords are held as `SecretString` and never appear in `Debug` output.

use crate::constants::DEFAULT_SKIP_VERIFY;
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Connection configuration for the engine.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Engine root URL (e.g., https://engine.example.com/ovirt-engine)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Optional PEM bundle of additional trusted CA certificates
    pub ca_file: Option<PathBuf>,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

/// Username/password credentials for the engine SSO.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with credentials and default connection settings.
    ///
    /// `base_url` is used verbatim; callers that start from a host name should
    /// go through [`crate::ConfigLoader`] instead.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: DEFAULT_SKIP_VERIFY,
                ca_file: None,
                timeout: None,
            },
            auth: AuthConfig { username, password },
        }
    }
}

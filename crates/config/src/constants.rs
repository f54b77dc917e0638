//! Centralized constants for the zvirt-report workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Engine Endpoint Layout
// =============================================================================

/// Path of the engine web application, appended to a bare host name.
pub const ENGINE_PATH: &str = "/ovirt-engine";

/// Path of the REST API relative to the engine root.
pub const API_PATH: &str = "/api";

/// Path of the SSO token endpoint relative to the engine root.
pub const SSO_TOKEN_PATH: &str = "/sso/oauth/token";

/// Path of the SSO logout endpoint relative to the engine root.
pub const SSO_LOGOUT_PATH: &str = "/services/sso-logout";

/// OAuth scope requested for API access tokens.
pub const SSO_SCOPE: &str = "ovirt-app-api";

/// API major version sent in the `Version` header.
pub const API_VERSION: &str = "4";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Certificate validation is disabled unless explicitly enabled.
pub const DEFAULT_SKIP_VERIFY: bool = true;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Output Defaults
// =============================================================================

/// Extension appended to output paths that lack it.
pub const XLSX_EXTENSION: &str = "xlsx";

/// Fixed location of the warning log.
pub const LOG_FILE_PATH: &str = "/tmp/zvirt-rep.log";

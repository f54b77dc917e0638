//! Configuration management for zvirt-report.
//!
//! This crate provides types and a loader for the engine connection
//! configuration, sourced from builder overrides, environment variables
//! and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, engine_base_url, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};

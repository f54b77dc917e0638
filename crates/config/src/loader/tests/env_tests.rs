//! Environment variable tests for the configuration loader builder.

use std::path::PathBuf;
use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;

#[test]
#[serial]
fn test_loader_reads_all_env_vars() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("ZVIRT_HOST", Some("engine.example.com")),
            ("ZVIRT_USERNAME", Some("admin@internal")),
            ("ZVIRT_PASSWORD", Some("from-env")),
            ("ZVIRT_SKIP_VERIFY", Some("false")),
            ("ZVIRT_CA_FILE", Some("/etc/pki/ovirt-engine/ca.pem")),
            ("ZVIRT_TIMEOUT", Some("45")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(
                config.connection.base_url,
                "https://engine.example.com/ovirt-engine"
            );
            assert_eq!(config.auth.username, "admin@internal");
            assert_eq!(config.auth.password.expose_secret(), "from-env");
            assert!(!config.connection.skip_verify);
            assert_eq!(
                config.connection.ca_file,
                Some(PathBuf::from("/etc/pki/ovirt-engine/ca.pem"))
            );
            assert_eq!(config.connection.timeout, Some(Duration::from_secs(45)));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("ZVIRT_HOST", Some("env.example.com")),
            ("ZVIRT_USERNAME", Some("env-user")),
            ("ZVIRT_PASSWORD", Some("env-pass")),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_host("cli.example.com".to_string())
                .with_username("cli-user".to_string())
                .build()
                .unwrap();
            assert_eq!(
                config.connection.base_url,
                "https://cli.example.com/ovirt-engine"
            );
            assert_eq!(config.auth.username, "cli-user");
            assert_eq!(config.auth.password.expose_secret(), "env-pass");
        },
    );
}

#[test]
#[serial]
fn test_invalid_skip_verify_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("ZVIRT_SKIP_VERIFY", Some("sometimes"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ZVIRT_SKIP_VERIFY"),
            other => panic!("expected InvalidValue, got {:?}", other.err()),
        }
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("ZVIRT_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("ZVIRT_HOST", Some("   ")), ("ZVIRT_USERNAME", Some(""))],
        || {
            assert!(env_var_or_none("ZVIRT_HOST").is_none());
            assert!(env_var_or_none("ZVIRT_USERNAME").is_none());

            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingHost)));
        },
    );
}

#[test]
#[serial]
fn test_env_var_values_are_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("ZVIRT_USERNAME", Some("  admin@internal  "), || {
        assert_eq!(
            env_var_or_none("ZVIRT_USERNAME").as_deref(),
            Some("admin@internal")
        );
    });
}

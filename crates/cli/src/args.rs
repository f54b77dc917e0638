//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Apply CLI values over environment configuration.
//!
//! Non-responsibilities:
//! - Does not open the engine session (see `zvirt_report::connection`).

use clap::Parser;
use std::path::PathBuf;
use zvirt_config::{Config, ConfigError, ConfigLoader};

#[derive(Parser, Debug)]
#[command(name = "zvirt-report")]
#[command(about = "zvirt-report - reporting tool for zVirt / oVirt engines", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  zvirt-report -s zvirt.example.com -u admin@internal -p secret /tmp/zvirt_report.xlsx\n  ZVIRT_PASSWORD=secret zvirt-report -s zvirt.example.com -u admin@internal report\n"
)]
pub struct Cli {
    /// Engine FQDN or IP, or the full engine URL
    #[arg(short = 's', long = "server", env = "ZVIRT_HOST", value_name = "zvirt.dom")]
    pub server: Option<String>,

    /// Engine login
    #[arg(short = 'u', long = "user", env = "ZVIRT_USERNAME", value_name = "user@dom")]
    pub user: Option<String>,

    /// Engine password
    #[arg(
        short = 'p',
        long = "password",
        env = "ZVIRT_PASSWORD",
        value_name = "pass",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Path to the output file (Ex.: /tmp/zvirt_report.xlsx)
    #[arg(value_name = "out.xlsx")]
    pub file: PathBuf,
}

impl Cli {
    /// Build the configuration: environment first, then CLI values.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(server) = &self.server {
            loader = loader.with_host(server.clone());
        }
        if let Some(user) = &self.user {
            loader = loader.with_username(user.clone());
        }
        if let Some(password) = &self.password {
            loader = loader.with_password(password.clone());
        }

        loader.build()
    }
}

//! zvirt-report - inventory report for zVirt / oVirt engines.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Open the engine session, run the report and close the session.
//! - Map the outcome to an exit code.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Collection and workbook layout (see `crates/report`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - The session is closed exactly once after it was opened.
//! - No output file is created unless the smoke test passed.

mod args;
mod error;
mod logging;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::ExitCode;
use std::path::Path;
use tracing::info;
use zvirt_config::{ConfigLoader, constants::LOG_FILE_PATH};
use zvirt_report::{connection, output_path};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    let log_guard = logging::init(Path::new(LOG_FILE_PATH));

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::GeneralError
        }
    };

    // `process::exit` skips destructors; flush the log writer first.
    drop(log_guard);
    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config().context("Failed to build configuration")?;
    let output = output_path(&cli.file);

    let client = connection::open(&config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.connection.base_url))?;

    let result = zvirt_report::run(&client, &output).await;
    connection::close(client).await;

    let summary = result.with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        path = %summary.path.display(),
        written = summary.written.len(),
        empty = summary.skipped_empty.len(),
        failed = summary.failed.len(),
        "Report written"
    );

    Ok(())
}

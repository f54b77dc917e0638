//! Inventory report for oVirt / zVirt engines.
//!
//! Enumerates the engine's object categories, flattens each category into a
//! table, and writes one `.xlsx` sheet per non-empty table.
//!
//! Data flows one way: [`connection`] → [`enumerator`] → [`collector`]
//! (with [`enricher`]) → [`workbook`].

pub mod collector;
pub mod connection;
pub mod enricher;
pub mod enumerator;
pub mod error;
pub mod manifest;
pub mod table;
pub mod workbook;

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use zvirt_client::EngineClient;

pub use error::{ReportError, Result};
pub use manifest::{Category, EnrichmentRule, FetchStrategy};
pub use table::{Cell, Row, Table};
pub use workbook::{SheetOutcome, WorkbookWriter, output_path, sheet_name};

/// Per-category outcome of a run.
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub path: PathBuf,
    /// Sheet names written, in order.
    pub written: Vec<String>,
    /// Categories with no objects.
    pub skipped_empty: Vec<String>,
    /// Categories that failed, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Progress notifications emitted by [`run_with_progress`].
#[derive(Debug)]
pub enum Progress<'a> {
    Collecting(&'a str),
    Failed(&'a ReportError),
}

/// Print progress to standard output.
pub fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Collecting(category) => println!("{category}"),
        Progress::Failed(error) => println!("{error}"),
    }
}

/// Collect every category and save the workbook at `output`.
///
/// Category names and failures are printed to standard output.
pub async fn run(client: &EngineClient, output: &Path) -> Result<ReportSummary> {
    run_with_progress(client, output, print_progress).await
}

/// Like [`run`], reporting progress through `on_progress`.
///
/// # Errors
///
/// Only discovery and workbook save failures are returned; per-category
/// failures are recorded in [`ReportSummary::failed`].
pub async fn run_with_progress<F>(
    client: &EngineClient,
    output: &Path,
    mut on_progress: F,
) -> Result<ReportSummary>
where
    F: FnMut(Progress<'_>),
{
    let categories = enumerator::list_categories(client).await?;
    info!(count = categories.len(), "Categories selected");

    let mut writer = WorkbookWriter::new(output);
    let mut summary = ReportSummary::default();

    for category in categories {
        on_progress(Progress::Collecting(category.name));

        let outcome = match collector::collect(client, category).await {
            Ok(table) => writer.write_table(category.name, &table),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(SheetOutcome::Written { sheet, .. }) => summary.written.push(sheet),
            Ok(SheetOutcome::SkippedEmpty) => {
                summary.skipped_empty.push(category.name.to_string())
            }
            Err(e) => {
                warn!(category = category.name, error = %e, "Category skipped");
                on_progress(Progress::Failed(&e));
                summary
                    .failed
                    .push((category.name.to_string(), e.to_string()));
            }
        }
    }

    summary.path = writer.finish()?;
    Ok(summary)
}

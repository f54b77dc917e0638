//! Error types for report generation.

use thiserror::Error;
use zvirt_client::ClientError;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The session could not be opened or failed its smoke test. Fatal.
    #[error("Connection failed: {0}")]
    Connection(#[source] ClientError),

    /// The capability list of the session could not be read. Fatal.
    #[error("Failed to discover categories: {0}")]
    Discovery(#[source] ClientError),

    /// A single category could not be fetched or enriched. The category is skipped.
    #[error("Failed to collect {category}: {source}")]
    Fetch {
        category: String,
        #[source]
        source: ClientError,
    },

    /// Two categories truncate to the same sheet name.
    #[error("Sheet name '{sheet}' for {category} is already used by another category")]
    DuplicateSheet { category: String, sheet: String },

    /// Workbook encoding or save failure.
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl ReportError {
    pub(crate) fn fetch(category: &str, source: ClientError) -> Self {
        Self::Fetch {
            category: category.to_string(),
            source,
        }
    }

    /// Whether the run cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Discovery(_))
    }
}

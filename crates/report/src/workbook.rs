//! Workbook output.
//!
//! Responsibilities:
//! - Derive the output path and sheet names.
//! - Write one sheet per non-empty table and save the workbook once.
//!
//! Invariants:
//! - Nothing touches the filesystem before [`WorkbookWriter::finish`].
//! - Sheet names are unique (case-insensitive, as in Excel).
//! - A sheet joins the workbook only after all of its cells were written, so a
//!   failed table leaves no partial sheet behind.
//! - Header row: empty first cell, then column names. Each data row starts with
//!   its zero-based index. Values are written as strings.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::warn;
use zvirt_config::constants::XLSX_EXTENSION;

use crate::error::{ReportError, Result};
use crate::table::Table;

/// Maximum sheet name length in Excel.
pub const SHEET_NAME_MAX_LEN: usize = 31;

/// Append `.xlsx` unless the path already ends with it.
pub fn output_path(raw: impl AsRef<Path>) -> PathBuf {
    let raw = raw.as_ref();
    let suffix = format!(".{XLSX_EXTENSION}");
    if raw.to_string_lossy().ends_with(&suffix) {
        raw.to_path_buf()
    } else {
        let mut os = raw.as_os_str().to_os_string();
        os.push(&suffix);
        PathBuf::from(os)
    }
}

/// First 31 characters of a category name.
pub fn sheet_name(category: &str) -> String {
    category.chars().take(SHEET_NAME_MAX_LEN).collect()
}

/// What happened to a table passed to [`WorkbookWriter::write_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Written { sheet: String, rows: usize },
    SkippedEmpty,
}

/// Accumulates sheets and saves them as one `.xlsx` file.
pub struct WorkbookWriter {
    path: PathBuf,
    workbook: Workbook,
    sheets: Vec<String>,
    header: Format,
}

impl WorkbookWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            workbook: Workbook::new(),
            sheets: Vec::new(),
            header: Format::new().set_bold(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names written so far, in order.
    pub fn sheets(&self) -> &[String] {
        &self.sheets
    }

    /// Add the sheet of one category.
    pub fn write_table(&mut self, category: &str, table: &Table) -> Result<SheetOutcome> {
        if table.is_empty() {
            return Ok(SheetOutcome::SkippedEmpty);
        }

        let sheet = sheet_name(category);
        let lower = sheet.to_lowercase();
        if self.sheets.iter().any(|s| s.to_lowercase() == lower) {
            return Err(ReportError::DuplicateSheet {
                category: category.to_string(),
                sheet,
            });
        }

        let columns = table.columns();
        let dropped = table.dropped_columns();
        if !dropped.is_empty() {
            tracing::debug!(category, ?dropped, "Dropped unresolved columns");
        }
        if columns.is_empty() {
            warn!(
                category,
                rows = table.len(),
                "No usable columns, writing index only"
            );
        }

        let mut worksheet = Worksheet::new();
        worksheet.set_name(&sheet)?;

        for (col, name) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, column_index(col + 1)?, *name, &self.header)?;
        }

        for row in 0..table.len() {
            let excel_row = row_index(row + 1)?;
            worksheet.write_number_with_format(excel_row, 0, row as f64, &self.header)?;
            for (col, name) in columns.iter().enumerate() {
                let value = table.value(row, name);
                if !value.is_empty() {
                    worksheet.write_string(excel_row, column_index(col + 1)?, value)?;
                }
            }
        }

        self.workbook.push_worksheet(worksheet);
        self.sheets.push(sheet.clone());
        Ok(SheetOutcome::Written {
            sheet,
            rows: table.len(),
        })
    }

    /// Save the workbook and return its path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.workbook.save(&self.path)?;
        Ok(self.path)
    }
}

fn row_index(index: usize) -> Result<u32> {
    u32::try_from(index)
        .map_err(|_| ReportError::Workbook(rust_xlsxwriter::XlsxError::RowColumnLimitError))
}

fn column_index(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| ReportError::Workbook(rust_xlsxwriter::XlsxError::RowColumnLimitError))
}

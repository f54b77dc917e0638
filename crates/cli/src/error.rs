//! CLI exit codes.
//!
//! Invariants:
//! - Per-category failures never change the exit code.
//! - Configuration, connection, discovery and workbook save failures exit with 1.

/// Exit codes for zvirt-report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The report was written, possibly without some categories.
    Success = 0,

    /// The report could not be produced.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

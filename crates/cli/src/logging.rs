//! File logging setup.
//!
//! Invariants:
//! - Logs go to a fixed file, never to the terminal.
//! - The default level is WARN; `RUST_LOG` can override it.
//! - A log file that cannot be opened disables logging but never fails the run.
//! - The returned guard must live until the process exits; dropping it flushes
//!   buffered lines.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name()?.to_string_lossy().into_owned();

    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init();

    Some(guard)
}

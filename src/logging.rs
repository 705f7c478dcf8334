//! Tracing setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! config directory. CLI commands log to stderr. Either way the subscriber is
//! installed at most once per process.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{FinanceError, FinanceResult};

/// Environment variable holding a tracing filter, e.g. `finviz=debug`
pub const LOG_ENV: &str = "FINVIZ_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter from `FINVIZ_LOG`, falling back to `default_filter`, then `info`
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr
pub fn init_tracing_stderr(default_filter: &str) {
    let filter = env_filter(default_filter);
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Append logs to `path`, creating parent directories as needed
pub fn init_tracing_to_file(path: &Path, default_filter: &str) -> FinanceResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| FinanceError::Io(format!("Failed to create log directory: {}", e)))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FinanceError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = env_filter(default_filter);
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}

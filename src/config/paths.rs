//! Path management for finviz
//!
//! finviz keeps no ledger data on disk; the only files are the settings file
//! and the TUI log.
//!
//! ## Path Resolution Order
//!
//! 1. `FINVIZ_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/finviz` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FINVIZ_CONFIG_DIR";

/// Manages all paths used by finviz
#[derive(Debug, Clone)]
pub struct FinvizPaths {
    base_dir: PathBuf,
}

impl FinvizPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "finviz")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinanceError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("finviz.log")
    }

    /// Create the config directory if it is missing
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create config directory: {}", e)))
    }
}

//! User settings for finviz
//!
//! Display and runtime preferences. Settings are configuration only; they
//! never contain transactions or budgets.

use serde::{Deserialize, Serialize};

use super::paths::FinvizPaths;
use crate::error::FinanceError;

/// User settings for finviz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for lists (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions in the recent list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// How long toast notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// TUI redraw tick
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when `FINVIZ_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_notification_secs() -> u64 {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
            notification_secs: default_notification_secs(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Never writes; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &FinvizPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinvizPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_missing_file_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinvizPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinvizPaths::with_base_dir(temp_dir.path().join("cfg"));

        let settings = Settings {
            currency_symbol: "$".into(),
            recent_limit: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinvizPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol":"€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.notification_secs, 3);
        assert_eq!(loaded.log_filter, "info");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinvizPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }
}

//! User settings for Money Flow
//!
//! Manages server and dashboard preferences: where to listen, how many
//! months the trend covers, and how many rows the listings return.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use super::paths::MoneyFlowPaths;
use crate::error::MoneyFlowError;
use crate::models::MAX_TREND_MONTHS;

/// Environment variable that overrides the listen port
pub const PORT_ENV: &str = "PORT";

/// User settings for Money Flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of months covered by the dashboard trend
    #[serde(default = "default_trend_window_months")]
    pub trend_window_months: usize,

    /// Number of transactions shown on the dashboard
    #[serde(default = "default_recent_transactions_limit")]
    pub recent_transactions_limit: usize,

    /// Default page size for transaction listings
    #[serde(default = "default_transaction_list_limit")]
    pub transaction_list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_trend_window_months() -> usize {
    6
}

fn default_recent_transactions_limit() -> usize {
    10
}

fn default_transaction_list_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            listen_addr: default_listen_addr(),
            currency_symbol: default_currency(),
            trend_window_months: default_trend_window_months(),
            recent_transactions_limit: default_recent_transactions_limit(),
            transaction_list_limit: default_transaction_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MoneyFlowPaths) -> Result<Self, MoneyFlowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MoneyFlowError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MoneyFlowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyFlowPaths) -> Result<(), MoneyFlowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoneyFlowError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MoneyFlowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check values that serde defaults cannot guard
    pub fn validate(&self) -> Result<(), MoneyFlowError> {
        if !(1..=MAX_TREND_MONTHS).contains(&self.trend_window_months) {
            return Err(MoneyFlowError::Config(format!(
                "trend_window_months must be between 1 and {}, got {}",
                MAX_TREND_MONTHS, self.trend_window_months
            )));
        }
        Ok(())
    }

    /// Apply the `PORT` environment variable, if set, to the listen address
    pub fn apply_env_overrides(&mut self) -> Result<(), MoneyFlowError> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| MoneyFlowError::Config(format!("Invalid {}: {}", PORT_ENV, port)))?;
            self.listen_addr.set_port(port);
        }
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
        assert_eq!(settings.listen_addr.port(), 3000);
        assert_eq!(settings.trend_window_months, 6);
        assert_eq!(settings.recent_transactions_limit, 10);
        assert_eq!(settings.transaction_list_limit, 50);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.trend_window_months = 12;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.trend_window_months, 12);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.recent_transactions_limit, 10);
        assert_eq!(settings.listen_addr, default_listen_addr());
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MoneyFlowError::Config(_)));
    }

    #[test]
    fn test_trend_window_is_bounded() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        for window in ["0", "121", "18446744073709551615"] {
            std::fs::write(
                paths.settings_file(),
                format!(r#"{{"trend_window_months": {}}}"#, window),
            )
            .unwrap();
            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(err.to_string().contains("trend_window_months"), "{}", err);
        }

        std::fs::write(paths.settings_file(), r#"{"trend_window_months": 120}"#).unwrap();
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.trend_window_months, 120);
    }
}

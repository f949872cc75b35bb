//! Client configuration.
//!
//! Defaults are compiled in. A partial JSON object stored in localStorage
//! under `mdb_ui_config` overrides individual fields, e.g.
//! `{"api_base": "http://127.0.0.1:8082", "toast_timeout_ms": 5000}`.

use contracts::shared::api::API_PREFIX;
use contracts::shared::transfer::DEFAULT_EXPORT_FILENAME;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "mdb_ui_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Empty means "same origin as the page", which is how the server hosts the UI.
    pub api_base: String,
    pub toast_timeout_ms: u32,
    pub export_filename: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_timeout_ms: 3000,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies a JSON object of overrides on top of the defaults.
    pub fn from_overrides(json: &str) -> Result<Self, String> {
        serde_json::from_str::<AppConfig>(json).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Загружает конфигурацию из localStorage, при ошибке использует значения по умолчанию
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => Self::from_overrides(&json).unwrap_or_else(|e| {
                log::warn!("{}; falling back to defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Builds an absolute URL for a path under `/api/v1`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.api_base.trim_end_matches('/'),
            API_PREFIX,
            path
        )
    }

    pub fn stats_url(&self) -> String {
        self.api_url("/stats")
    }

    pub fn databases_url(&self) -> String {
        self.api_url("/databases")
    }

    pub fn database_url(&self, name: &str) -> String {
        self.api_url(&format!("/databases/{}", urlencoding::encode(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.stats_url(), "/api/v1/stats");
        assert_eq!(config.export_filename, "export.json");
        assert_eq!(config.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_partial_overrides() {
        let config =
            AppConfig::from_overrides(r#"{"api_base": "http://127.0.0.1:8082/"}"#).unwrap();
        assert_eq!(config.stats_url(), "http://127.0.0.1:8082/api/v1/stats");
        assert_eq!(config.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_database_url_is_encoded() {
        let config = AppConfig::default();
        assert_eq!(config.database_url("my db"), "/api/v1/databases/my%20db");
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(AppConfig::from_overrides("{ nope").is_err());
    }
}

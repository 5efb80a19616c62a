//! Client configuration loading and management

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// Environment variable overriding [`ClientConfig::base_url`]
pub const BACKEND_URL_ENV: &str = "SWAPI_BACKEND_URL";

/// Configuration shared by the HTTP client and the listing controllers
///
/// Every field is optional in YAML and falls back to its default:
///
/// ```yaml
/// base_url: http://localhost:8000/api
/// page_size: 15
/// debounce_ms: 300
/// min_loading_ms: 500
/// request_timeout_secs: 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the listing API, without trailing resource path
    #[validate(url)]
    pub base_url: String,

    /// Records per page, fixed for a listing's lifetime
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,

    /// Quiet period before search input reaches the controller
    pub debounce_ms: u64,

    /// Floor between issuing a fetch and applying its result (0 disables)
    pub min_loading_ms: u64,

    /// Per-request timeout
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            page_size: 15,
            debounce_ms: 300,
            min_loading_ms: 500,
            request_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply [`BACKEND_URL_ENV`] over `base_url` when set and non-empty
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let base_url = std::env::var(BACKEND_URL_ENV).ok();
        self.with_base_url_override(base_url)
    }

    fn with_base_url_override(mut self, base_url: Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
            self.validate()?;
        }
        Ok(self)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn min_loading(&self) -> Duration {
        Duration::from_millis(self.min_loading_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 15);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.min_loading(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ClientConfig::from_yaml_str("page_size: 10\nmin_loading_ms: 0\n").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.min_loading(), Duration::ZERO);
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ClientConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(ClientConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = ClientConfig::from_yaml_str("page_size: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = ClientConfig::from_yaml_str("base_url: not a url").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default()
            .with_base_url_override(Some(" https://swapi.example.com/api ".to_string()))
            .unwrap();
        assert_eq!(config.base_url, "https://swapi.example.com/api");

        let unchanged = ClientConfig::default()
            .with_base_url_override(Some("   ".to_string()))
            .unwrap();
        assert_eq!(unchanged.base_url, "http://localhost:8000/api");
    }
}

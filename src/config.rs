//! Widget configuration.
//!
//! Resolution order mirrors credential loading elsewhere in the product:
//! 1. Environment variables (`HARMONY_WIDGETS_BASE_URL`, `HARMONY_WIDGETS_DEMO`)
//! 2. ~/.harmony/widgets.json (dev override)
//! 3. Embedded production defaults
//!
//! The host CRM is assumed to be authenticated already; no tokens live here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Production endpoint family. Record-type paths are appended per request.
pub const DEFAULT_BASE_URL: &str =
    "https://viwushnyjfdzaktsdjoo.supabase.co/functions/v1/hubspot";

/// Errors from loading or validating widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file {path}: {source}")]
    InvalidFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },
}

/// Configuration for a widget registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Base origin for the three record endpoints.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// When true, a failed fetch falls back to a bundled sample record,
    /// flagged as demo data. Off by default: failures surface as failures.
    #[serde(default)]
    pub demo_mode: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            demo_mode: false,
        }
    }
}

/// Path to the optional config file override.
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".harmony")
        .join("widgets.json")
}

impl WidgetConfig {
    /// Load configuration: file override if present, then env var overrides,
    /// falling back to embedded defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFile {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("HARMONY_WIDGETS_BASE_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(demo) = std::env::var("HARMONY_WIDGETS_DEMO") {
            config.demo_mode = matches!(demo.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Validate and parse the configured base URL.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.demo_mode);
        assert!(config.parsed_base_url().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.json");
        std::fs::write(
            &path,
            r#"{"baseUrl": "https://staging.example.com/hubspot", "demoMode": true}"#,
        )
        .unwrap();

        let config = WidgetConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://staging.example.com/hubspot");
        assert!(config.demo_mode);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WidgetConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            WidgetConfig::load_from(&path),
            Err(ConfigError::InvalidFile { .. })
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = WidgetConfig {
            base_url: "not a url".into(),
            demo_mode: false,
        };
        assert!(matches!(
            config.parsed_base_url(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}

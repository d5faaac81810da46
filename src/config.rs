use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Endpoint the brand checks are POSTed to when no config file exists.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/check-brand-list";

/// Default path the CSV export is written to.
pub const DEFAULT_EXPORT_PATH: &str = "results.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the brand-mention check endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Where the CSV export is written
    #[serde(default = "default_export_path")]
    pub export_path: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            export_path: default_export_path(),
        }
    }
}

impl Config {
    fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".brandcheck-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.export_path, DEFAULT_EXPORT_PATH);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.export_path, DEFAULT_EXPORT_PATH);

        let config: Config =
            serde_json::from_str(r#"{"endpoint": "http://example.com/check"}"#).unwrap();
        assert_eq!(config.endpoint, "http://example.com/check");
        assert_eq!(config.export_path, DEFAULT_EXPORT_PATH);
    }
}

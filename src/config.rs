//! Configuration handling for the TUI

use crate::state::DEFAULT_NOTIFICATION_DURATION;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// How long the success notification stays visible, in milliseconds
    pub notification_duration_ms: Option<u64>,
    /// Validate text fields when focus leaves them
    pub validate_on_blur: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION)
    }

    pub fn validate_on_blur(&self) -> bool {
        self.validate_on_blur.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.notification_duration_ms.is_none());
        assert!(config.validate_on_blur.is_none());
        assert_eq!(config.notification_duration(), Duration::from_millis(3000));
        assert!(config.validate_on_blur());
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            notification_duration_ms: Some(1500),
            validate_on_blur: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.notification_duration_ms, Some(1500));
        assert_eq!(parsed.validate_on_blur, Some(false));
        assert_eq!(parsed.notification_duration(), Duration::from_millis(1500));
        assert!(!parsed.validate_on_blur());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.notification_duration_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"notification_duration_ms": 250, "theme": "dark"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notification_duration_ms, Some(250));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FormConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.notification_duration_ms.is_none());
        assert!(config.validate_on_blur());
    }

    #[test]
    fn test_load_from_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"notification_duration_ms": 800, "validate_on_blur": false}"#)
            .unwrap();

        let config = FormConfig::load_from(&path).unwrap();
        assert_eq!(config.notification_duration(), Duration::from_millis(800));
        assert!(!config.validate_on_blur());
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(FormConfig::load_from(&path).is_err());
    }
}

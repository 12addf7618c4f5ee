//! Configuration handling for the TUI

use crate::state::EntityType;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tracing filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "seb_form=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Form branch shown on start
    pub default_entity_type: Option<EntityType>,
    /// Show key hints in the status bar
    pub show_key_hints: Option<bool>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "seb-form", "seb-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("seb-form.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::parse(&fs::read_to_string(&path)?),
            _ => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn entity_type(&self) -> EntityType {
        self.default_entity_type.unwrap_or_default()
    }

    pub fn key_hints_enabled(&self) -> bool {
        self.show_key_hints.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.default_entity_type.is_none());
        assert!(config.show_key_hints.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.entity_type(), EntityType::Individual);
        assert!(config.key_hints_enabled());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            default_entity_type: Some(EntityType::Legal),
            show_key_hints: Some(false),
            log_filter: Some("seb_form=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = TuiConfig::parse(&json).unwrap();

        assert_eq!(parsed.entity_type(), EntityType::Legal);
        assert!(!parsed.key_hints_enabled());
        assert_eq!(parsed.log_filter(), "seb_form=debug");
    }

    #[test]
    fn test_entity_type_written_lowercase() {
        let config = TuiConfig {
            default_entity_type: Some(EntityType::Legal),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"legal\""));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::parse("{}").unwrap();
        assert!(parsed.default_entity_type.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_entity_type": "legal", "unknown_field": "value"}"#;
        let parsed = TuiConfig::parse(json).unwrap();
        assert_eq!(parsed.entity_type(), EntityType::Legal);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(TuiConfig::parse("{\"show_key_hints\": \"yes\"}").is_err());
        assert!(TuiConfig::parse("not json").is_err());
    }

    #[test]
    fn test_paths_share_project_dirs() {
        // Just test that the functions don't panic
        let _config = TuiConfig::config_path();
        let _log = TuiConfig::log_path();
    }
}

// src/config.rs

//! Application configuration structures and loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::ListSettings;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default rendering settings, overridable per tag
    #[serde(default)]
    pub list: ListSettings,

    /// Attribute extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Daily rotation settings
    #[serde(default)]
    pub rotation: RotationConfig,

    /// Language code for the built-in locale tables
    #[serde(default = "default_language")]
    pub language: String,
}

/// Settings for the template block scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Template block marker, e.g. `{{Infobox Project ...}}`
    #[serde(default = "default_block_marker")]
    pub block_marker: String,

    /// Default image reference for records without one
    #[serde(default)]
    pub default_image: String,

    /// Default description for records without one
    #[serde(default)]
    pub default_description: String,
}

/// Settings for the daily rotation cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Cache namespace prefix for rotation entries
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_block_marker() -> String {
    "Infobox Project".to_string()
}

fn default_namespace() -> String {
    "showcase".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list: ListSettings::default(),
            extract: ExtractConfig::default(),
            rotation: RotationConfig::default(),
            language: default_language(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            block_marker: default_block_marker(),
            default_image: String::new(),
            default_description: String::new(),
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return defaults if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.extract.block_marker.trim().is_empty() {
            return Err(AppError::validation("extract.block_marker is empty"));
        }
        if self.list.limit == 0 {
            return Err(AppError::validation("list.limit must be > 0"));
        }
        if self.list.thumb_size == 0 {
            return Err(AppError::validation("list.thumb_size must be > 0"));
        }
        if self.rotation.namespace.trim().is_empty() {
            return Err(AppError::validation("rotation.namespace is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            language = "de"

            [list]
            thumb_size = 120

            [extract]
            default_image = "Placeholder.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.language, "de");
        assert_eq!(config.list.thumb_size, 120);
        assert_eq!(config.list.limit, 4);
        assert_eq!(config.extract.default_image, "Placeholder.png");
        assert_eq!(config.extract.block_marker, "Infobox Project");
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let mut config = Config::default();
        config.extract.block_marker = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.list.limit, 4);
    }
}

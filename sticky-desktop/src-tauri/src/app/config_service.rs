//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the startup configuration
//! from the configuration file (`<config dir>/stickychat/config.toml`).

use crate::app::paths::StickyPaths;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use sticky_core::config::AppConfig;
use sticky_core::error::{Result, StickyError};

/// Configuration service that loads and caches the startup configuration.
///
/// This implementation reads the configuration from config.toml and caches
/// it to avoid repeated file I/O. The file is created with defaults on
/// first run; a missing or malformed file degrades to the built-in
/// defaults rather than failing startup.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Load failures are logged and replaced by defaults; the widget must
    /// come up even with a broken config file.
    pub fn get_config(&self) -> AppConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = Self::load_config().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {}", e);
            AppConfig::default()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Loads AppConfig from the default config file location.
    fn load_config() -> Result<AppConfig> {
        Self::load_config_from(&Self::get_config_path()?)
    }

    /// Loads AppConfig from the given path, creating the file with defaults
    /// if it does not exist yet.
    fn load_config_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            let default_config = AppConfig::default();
            Self::write_default(config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            StickyError::io(format!(
                "Failed to read config file at {:?}: {}",
                config_path, e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the default configuration to disk so users have a template
    /// to edit.
    fn write_default(config_path: &Path, config: &AppConfig) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StickyError::io(format!(
                    "Failed to create config directory at {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        fs::write(config_path, toml_string).map_err(|e| {
            StickyError::io(format!(
                "Failed to write config file at {:?}: {}",
                config_path, e
            ))
        })?;

        tracing::info!("Created default config at {:?}", config_path);
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        StickyPaths::config_file().map_err(|e| StickyError::config(e.to_string()))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("stickychat").join("config.toml");

        let config = ConfigService::load_config_from(&config_path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config_path.exists(), "default config should be written");

        // The written template must parse back to the same defaults
        let reloaded = ConfigService::load_config_from(&config_path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_configured_names_and_flag_are_loaded() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut file = fs::File::create(&config_path).unwrap();
        write!(
            file,
            r#"
always_on_top = false

[[participant]]
name = "Alice"

[[participant]]
name = "Bob"
"#
        )
        .unwrap();

        let config = ConfigService::load_config_from(&config_path).unwrap();

        assert!(!config.always_on_top);
        let pair = config.participant_pair();
        assert_eq!(pair[0].name, "Alice");
        assert_eq!(pair[1].name, "Bob");
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "   \n").unwrap();

        let config = ConfigService::load_config_from(&config_path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "always_on_top = \"not a bool\"").unwrap();

        let err = ConfigService::load_config_from(&config_path).unwrap_err();
        assert!(matches!(
            err,
            StickyError::Serialization { .. }
        ));
    }
}

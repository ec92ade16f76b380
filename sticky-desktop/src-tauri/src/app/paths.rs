//! Unified path management for StickyChat files.
//!
//! All StickyChat paths hang off the platform config directory, resolved
//! via the `dirs` crate so the layout is consistent across Linux, macOS,
//! and Windows.
//!
//! # Directory Structure
//!
//! ```text
//! <config dir>/stickychat/            # e.g. ~/.config/stickychat/
//! ├── config.toml                     # Startup configuration (seed only)
//! └── logs/
//!     └── sticky-desktop.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for StickyChat.
pub struct StickyPaths;

impl StickyPaths {
    /// Returns the StickyChat configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the config directory (e.g., `~/.config/stickychat/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("stickychat"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the application log directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

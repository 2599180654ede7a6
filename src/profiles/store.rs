//! Profile configuration file I/O

use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::config::profiles as profile_config;
use crate::error::CosmicError;

use super::models::ProfileConfig;

/// Handles reading the profile configuration file
pub struct ProfileStore {
    config_path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a store using COSMIC_CLI_CONFIG or the default path (~/.cosmic-cli/config.toml)
    pub fn new() -> Self {
        match std::env::var(profile_config::ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!("Using config path from {}: {}", profile_config::ENV_VAR, path);
                Self::with_path(PathBuf::from(path))
            }
            _ => Self {
                config_path: Self::default_config_path(),
            },
        }
    }

    /// Create a store with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path the store reads from
    pub fn path(&self) -> &std::path::Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(profile_config::DIR_NAME)
            .join(profile_config::FILE_NAME)
    }

    /// Load the profile configuration from disk.
    /// Returns an empty config if the file doesn't exist, errors on invalid TOML.
    pub fn load(&self) -> Result<ProfileConfig, CosmicError> {
        if !self.config_path.exists() {
            debug!(
                "No config file at {}, continuing without profiles",
                self.config_path.display()
            );
            return Ok(ProfileConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            CosmicError::Config(format!(
                "Failed to read config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CosmicError::Config(format!(
                "Failed to parse config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }
}

use crate::DEFAULT_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the configured backend base URL.
pub const BASE_URL_ENV_VAR: &str = "PAPERMIND_BASE_URL";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            backend: BackendConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file yields defaults; a file that exists but cannot be
    /// read, parsed, or validated is an error rather than silently
    /// replaced.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename for atomicity (no corruption on crash).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, or the write/rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let url = &self.backend.base_url;

        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "backend.base_url cannot be empty".to_string(),
            });
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", url),
            });
        }

        Ok(())
    }

    /// The effective backend base URL: the environment override wins over
    /// the configured value.
    pub fn resolve_base_url(&self) -> String {
        match env::var(BASE_URL_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.backend.base_url.clone(),
        }
    }
}

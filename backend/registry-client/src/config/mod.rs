//! Client configuration: TOML file, `.env`/environment overrides, defaults.

use crate::REGISTRY_DEFAULT_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_DIR_NAME: &str = "registry-client";
const CONFIG_FILE_NAME: &str = "registry.toml";

pub const ENV_BASE_URL: &str = "REGISTRY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "REGISTRY_TIMEOUT_SECS";

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL including the API prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout applied to the underlying HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    REGISTRY_DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl RegistryConfig {
    /// Load config from a TOML file.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read,
    /// parsed or validated is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: RegistryConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// `{config_dir}/registry-client/registry.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Defaults overridden by `.env` and process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to parse .env: {}", e),
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Overwrite fields from `REGISTRY_BASE_URL` and `REGISTRY_TIMEOUT_SECS`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|e| ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                name: ENV_TIMEOUT_SECS,
                reason: format!("'{raw}' is not a number of seconds: {e}"),
            })?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", self.base_url),
            });
        }

        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL {}: {}", self.base_url, e),
            });
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {} (must be {}-{} seconds)",
                    self.timeout_secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}

//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/adresse-geocoder/config.toml

pub mod defaults;

use crate::constants::api::USER_AGENT;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Address API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Default request options
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Address API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are joined to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default request options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of results when no limit is given
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Raise errors on missing data instead of returning nothing
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// Latitude used when reverse-search input is not a number
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,

    /// Longitude used when reverse-search input is not a number
    #[serde(default = "default_fallback_lng")]
    pub fallback_lng: f64,

    /// Default CLI output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    USER_AGENT.to_string()
}
fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
fn default_strict() -> bool {
    DEFAULT_STRICT
}
fn default_fallback_lat() -> f64 {
    DEFAULT_FALLBACK_LAT
}
fn default_fallback_lng() -> f64 {
    DEFAULT_FALLBACK_LNG
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            strict: default_strict(),
            fallback_lat: default_fallback_lat(),
            fallback_lng: default_fallback_lng(),
            format: default_format(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DefaultsConfig {
    /// Fallback coordinates for invalid reverse-search input
    pub fn fallback(&self) -> Coordinates {
        Coordinates::new(self.fallback_lat, self.fallback_lng)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => Some(self.api.base_url.clone()),
            ["api", "timeout_secs"] => Some(self.api.timeout_secs.to_string()),
            ["api", "user_agent"] => Some(self.api.user_agent.clone()),

            ["defaults", "limit"] => Some(self.defaults.limit.to_string()),
            ["defaults", "strict"] => Some(self.defaults.strict.to_string()),
            ["defaults", "fallback_lat"] => Some(self.defaults.fallback_lat.to_string()),
            ["defaults", "fallback_lng"] => Some(self.defaults.fallback_lng.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["log", "level"] => Some(self.log.level.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "base_url"] => {
                url::Url::parse(value)
                    .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", value, e)))?;
                self.api.base_url = value.to_string();
            }
            ["api", "timeout_secs"] => {
                self.api.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["api", "user_agent"] => {
                self.api.user_agent = value.to_string();
            }

            ["defaults", "limit"] => {
                self.defaults.limit = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid limit value: {}", value))
                })?;
            }
            ["defaults", "strict"] => {
                self.defaults.strict = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }
            ["defaults", "fallback_lat"] => {
                self.defaults.fallback_lat = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid latitude value: {}", value))
                })?;
            }
            ["defaults", "fallback_lng"] => {
                self.defaults.fallback_lng = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid longitude value: {}", value))
                })?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["log", "level"] => {
                self.log.level = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.base_url",
            "api.timeout_secs",
            "api.user_agent",
            "defaults.limit",
            "defaults.strict",
            "defaults.fallback_lat",
            "defaults.fallback_lng",
            "defaults.format",
            "log.level",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "https://api-adresse.data.gouv.fr/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.defaults.limit, 1);
        assert!(!config.defaults.strict);
        assert_eq!(config.defaults.fallback(), Coordinates::new(0.0, 0.0));
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.strict"), Some("false".to_string()));

        config.set("defaults.strict", "true").unwrap();
        assert_eq!(config.get("defaults.strict"), Some("true".to_string()));
        assert!(config.defaults.strict);

        config.set("defaults.limit", "5").unwrap();
        assert_eq!(config.defaults.limit, 5);

        config.set("defaults.fallback_lat", "48.8566").unwrap();
        config.set("defaults.fallback_lng", "2.3522").unwrap();
        assert_eq!(config.defaults.fallback(), Coordinates::new(48.8566, 2.3522));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("defaults.limit", "many").is_err());
        assert!(config.set("defaults.strict", "maybe").is_err());
        assert!(config.set("api.base_url", "not a url").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.api.base_url = "http://localhost:7878/".to_string();
        config.defaults.strict = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:7878/");
        assert!(loaded.defaults.strict);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults]\nlimit = 10\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.limit, 10);
        assert_eq!(loaded.defaults.format, "json");
        assert_eq!(loaded.api.timeout_secs, 30);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults\nlimit = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialization_format() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml.contains("[api]"));
        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[log]"));
    }

    #[test]
    fn test_available_keys() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "missing getter for {}", key);
        }
    }
}

//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = crate::constants::api::BASE_URL;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of results requested
pub const DEFAULT_LIMIT: u32 = 1;

/// Missing data returns `None` instead of an error by default
pub const DEFAULT_STRICT: bool = false;

/// Fallback latitude for invalid reverse-search input
pub const DEFAULT_FALLBACK_LAT: f64 = 0.0;

/// Fallback longitude for invalid reverse-search input
pub const DEFAULT_FALLBACK_LNG: f64 = 0.0;

/// Default output format
pub const DEFAULT_FORMAT: &str = "json";

/// Default log level when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "adresse-geocoder";

//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants
//! for environment keys, greeting defaults, cache headers, and logging.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Both endpoints serve per-request dynamic content (the greeting embeds a
// counter, the health probe must always be fresh), so upstream caches are
// told to never store responses.

/// Dynamic content max-age in seconds
pub const HTTP_CACHE_DYNAMIC_MAX_AGE: u32 = 0;

pub const CACHE_CONTROL_DYNAMIC: &str =
    formatcp!("no-store, max-age={}", HTTP_CACHE_DYNAMIC_MAX_AGE);

// =============================================================================
// Environment Keys and Defaults
// =============================================================================

/// Environment key for the greeting prefix, re-read on every request
pub const GREETING_KEY: &str = "GREETING";

/// Environment key for the host identity, captured once at startup
pub const HOSTNAME_KEY: &str = "HOSTNAME";

/// Greeting used when `GREETING` is unset
pub const DEFAULT_GREETING: &str = "Hi";

/// Host identity used when `HOSTNAME` is unset
pub const DEFAULT_HOSTNAME: &str = "unknown";

/// Body returned by the liveness probe
pub const HEALTH_BODY: &str = "Up and running";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hail=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields built-in defaults so the service runs with
    /// zero configuration; a present but malformed file is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

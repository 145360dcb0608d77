//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings for reachability probes
    #[serde(default)]
    pub http: HttpConfig,

    /// Batch iteration settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Progress reporting settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
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
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.batch.page_size == 0 {
            return Err(AppError::validation("batch.page_size must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client settings for reachability probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Batch iteration settings for the post store cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of posts fetched per page
    #[serde(default = "defaults::page_size")]
    pub page_size: u64,

    /// Pause between pages in milliseconds, to bound load on the store
    #[serde(default = "defaults::page_delay")]
    pub page_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            page_delay_ms: defaults::page_delay(),
        }
    }
}

/// Progress reporting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit a progress line after each processed page
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; linksweep/1.0)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Batch defaults
    pub fn page_size() -> u64 {
        1000
    }
    pub fn page_delay() -> u64 {
        10
    }

    // Logging defaults
    pub fn show_progress() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.batch.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[batch]\npage_size = 50\n").unwrap();
        assert_eq!(config.batch.page_size, 50);
        assert_eq!(config.batch.page_delay_ms, 10);
        assert_eq!(config.http.timeout_secs, 10);
    }
}

//! Client configuration.
//!
//! `ServerConfig` carries everything the API client needs: site URL, API
//! token, outbound rate limit and TLS settings. The library only ever receives
//! it as a value; loading from TOML on disk is provided for the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{BsError, BsResult};
use crate::platform::Platform;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Site URL (e.g., "https://docs.example.com").
    #[serde(default)]
    pub url: String,

    /// API token identifier.
    #[serde(default)]
    pub token_id: String,

    /// API token secret.
    #[serde(default)]
    pub token_secret: String,

    /// Maximum outbound requests per second.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_rate_limit() -> u32 {
    constants::DEFAULT_RATE_LIMIT
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token_id: String::new(),
            token_secret: String::new(),
            rate_limit: default_rate_limit(),
            insecure: false,
            timeout_ms: default_api_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ServerConfig {
    /// Check that the settings can produce a working client.
    pub fn validate(&self) -> BsResult<()> {
        if self.url.trim().is_empty() {
            return Err(BsError::MissingConfig("server.url".into()));
        }
        if self.rate_limit == 0 {
            return Err(BsError::Config("rate_limit must be greater than zero".into()));
        }
        Ok(())
    }

    /// Whether both halves of the API token are present.
    pub fn has_token(&self) -> bool {
        !self.token_id.is_empty() && !self.token_secret.is_empty()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, or defaults if absent.
    pub fn load_default() -> BsResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> BsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> BsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| BsError::Serialization(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> BsResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> BsResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Sanitize and normalize a site URL.
    ///
    /// Strips surrounding whitespace and quotes and adds a scheme when missing
    /// (`https` for anything that is not an IP address or localhost).
    pub fn sanitize_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return trimmed.to_string();
        }

        let host = trimmed.split(|c: char| c == '/' || c == ':').next().unwrap_or_default();
        let is_local = host == "localhost" || host.chars().all(|c| c.is_ascii_digit() || c == '.');
        if is_local {
            format!("http://{trimmed}")
        } else {
            format!("https://{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.rate_limit, 180);
        assert_eq!(config.server.timeout_ms, 30_000);
        assert!(!config.server.insecure);
        assert!(!config.server.has_token());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate() {
        let mut server = ServerConfig::default();
        assert!(matches!(server.validate(), Err(BsError::MissingConfig(_))));

        server.url = "https://docs.example.com".into();
        assert!(server.validate().is_ok());

        server.rate_limit = 0;
        assert!(matches!(server.validate(), Err(BsError::Config(_))));
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(
            AppConfig::sanitize_url("docs.example.com"),
            "https://docs.example.com"
        );
        assert_eq!(
            AppConfig::sanitize_url("  \"https://example.com/\"  "),
            "https://example.com/"
        );
        assert_eq!(
            AppConfig::sanitize_url("192.168.1.5:6875"),
            "http://192.168.1.5:6875"
        );
        assert_eq!(AppConfig::sanitize_url("localhost:8080"), "http://localhost:8080");
        assert_eq!(AppConfig::sanitize_url("   "), "");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            url = "https://wiki.local"
            token_id = "abc"
            token_secret = "def"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.url, "https://wiki.local");
        assert!(config.server.has_token());
        assert_eq!(config.server.rate_limit, 180);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.server.url = "https://wiki.local".into();
        config.server.rate_limit = 10;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.url, "https://wiki.local");
        assert_eq!(loaded.server.rate_limit, 10);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nurl = ").unwrap();
        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(BsError::Config(_))
        ));
    }
}

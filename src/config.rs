//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Resource path prefix for city lookups, e.g. "/zips/"
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// PEM certificate path; HTTPS is enabled when both this and
    /// `tls_key` are set
    pub tls_cert: Option<PathBuf>,

    /// PEM private key path
    pub tls_key: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path_prefix() -> String {
    "/zips/".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path_prefix: default_path_prefix(),
            tls_cert: None,
            tls_key: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Certificate and key paths when both are configured
    pub fn tls_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Some((cert, key)),
            _ => None,
        }
    }

    /// True when exactly one of cert/key is set
    pub fn tls_partially_configured(&self) -> bool {
        self.tls_cert.is_some() != self.tls_key.is_some()
    }
}

/// Dataset loading configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the zip-code CSV file
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Expected record count, used only to preallocate storage
    #[serde(default = "default_expected_records")]
    pub expected_records: usize,
}

fn default_csv_path() -> String {
    "zips.csv".to_string()
}

fn default_expected_records() -> usize {
    43_000
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            expected_records: default_expected_records(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("zipserve").join("config.toml")),
            Some(PathBuf::from("/etc/zipserve/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("ZIPSERVE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ZIPSERVE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(prefix) = std::env::var("ZIPSERVE_PREFIX") {
            self.server.path_prefix = prefix;
        }
        if let Ok(cert) = std::env::var("ZIPSERVE_TLS_CERT") {
            self.server.tls_cert = Some(PathBuf::from(cert));
        }
        if let Ok(key) = std::env::var("ZIPSERVE_TLS_KEY") {
            self.server.tls_key = Some(PathBuf::from(key));
        }

        // Dataset overrides
        if let Ok(csv) = std::env::var("ZIPSERVE_CSV") {
            self.dataset.csv_path = csv;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("ZIPSERVE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ZIPSERVE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Zipserve Configuration
#
# Environment variables override these settings:
# - ZIPSERVE_HOST, ZIPSERVE_PORT, ZIPSERVE_PREFIX
# - ZIPSERVE_TLS_CERT, ZIPSERVE_TLS_KEY
# - ZIPSERVE_CSV
# - ZIPSERVE_LOG_LEVEL, ZIPSERVE_LOG_FORMAT

[server]
# Server host and port
host = "0.0.0.0"
port = 8080

# Resource path prefix for city lookups
path_prefix = "/zips/"

# Uncomment both to serve HTTPS instead of plain HTTP
# tls_cert = "/etc/zipserve/cert.pem"
# tls_key = "/etc/zipserve/key.pem"

[dataset]
# Path to the zip-code CSV file (column 0 = code, 3 = city, 6 = state)
csv_path = "zips.csv"

# Expected record count, used to preallocate storage
expected_records = 43000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.path_prefix, "/zips/");
        assert_eq!(config.dataset.csv_path, "zips.csv");
        assert!(config.server.tls_paths().is_none());
        assert!(!config.server.tls_partially_configured());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [server]
            host = "127.0.0.1"
            port = 9090
            path_prefix = "/postal/"

            [dataset]
            csv_path = "data/zips.csv"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:9090");
        assert_eq!(config.server.path_prefix, "/postal/");
        assert_eq!(config.dataset.csv_path, "data/zips.csv");
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.dataset.expected_records, 43_000);
    }

    #[test]
    fn test_tls_paths_require_both() {
        let mut server = ServerConfig::default();
        server.tls_cert = Some(PathBuf::from("cert.pem"));
        assert!(server.tls_paths().is_none());
        assert!(server.tls_partially_configured());

        server.tls_key = Some(PathBuf::from("key.pem"));
        assert!(server.tls_paths().is_some());
        assert!(!server.tls_partially_configured());
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
    }
}

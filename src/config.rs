//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Timing data configuration
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Directory containing `start.log`, `end.log` and `abbreviations.txt`
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            data: DataConfig::from_env(),
        })
    }

    /// Configuration with defaults and the given data directory
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig { dir: dir.into() },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_port(env::var("SERVER_PORT").ok().as_deref())?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

impl DataConfig {
    fn from_env() -> Self {
        Self {
            dir: PathBuf::from(
                env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_SERVER_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

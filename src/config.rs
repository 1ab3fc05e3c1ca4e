//! Configuration management for StudyGate
//!
//! Parses TOML configuration files and provides typed access to settings.
//! The upstream API key is resolved at startup (config file or environment)
//! and missing credentials are a fatal error before the server binds.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable consulted when the config file carries no API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream model configuration
///
/// Fields are private to enforce invariants. Configuration is loaded via
/// deserialization and validated via Config::validate(). After construction,
/// fields cannot be mutated, ensuring validated data remains valid.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Model identifier, e.g. "gemini-2.0-flash"
    name: String,
    /// Upstream API base URL (overridable so tests can point at a mock server)
    #[serde(default = "default_base_url")]
    base_url: String,
    /// API key. When absent, the GEMINI_API_KEY environment variable is used.
    #[serde(default)]
    api_key: Option<String>,
}

impl ModelConfig {
    /// Get the model identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the upstream API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the API key from config or environment
    ///
    /// Fails when neither source provides a non-blank key. Called once at
    /// startup so a missing credential aborts before the server binds.
    pub fn resolve_api_key(&self) -> AppResult<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{API_KEY_ENV} не найден: задайте model.api_key в конфигурации или переменную окружения {API_KEY_ENV}"
                ))
            })
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl ObservabilityConfig {
    /// Get the default log level used when RUST_LOG is not set
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants
    ///
    /// Checks structural invariants only; API key resolution happens
    /// separately because it may consult the environment.
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }

        if self.model.name.trim().is_empty() {
            return Err(AppError::Config(
                "model.name must not be empty".to_string(),
            ));
        }

        if self.model.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "model.base_url must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub inference: InferenceConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Parse an `APP_ENV` value; unknown values fall back to development
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on a whole request, inference and save included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Largest accepted request body; inline images travel base64-encoded in it
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Inference service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL without a trailing slash; endpoint paths are appended to it
    pub base_url: String,
    #[serde(default = "default_inference_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_inference_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "emotion-orchestrator".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    60
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_inference_timeout() -> u64 {
    30
}

fn default_inference_connect_timeout() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let inference_url = get("INFERENCE_SERVICE_URL")
            .or_else(|| get("PYTHON_SERVICE_URL"))
            .ok_or(ConfigError::MissingVar("INFERENCE_SERVICE_URL"))?;

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .map(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_or("API_PORT", get("API_PORT"), default_port)?,
                request_timeout_secs: parse_or(
                    "REQUEST_TIMEOUT_SECS",
                    get("REQUEST_TIMEOUT_SECS"),
                    default_request_timeout,
                )?,
                max_body_bytes: parse_or(
                    "API_MAX_BODY_BYTES",
                    get("API_MAX_BODY_BYTES"),
                    default_max_body_bytes,
                )?,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    get("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    get("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
            },
            inference: InferenceConfig {
                base_url: inference_url.trim().trim_end_matches('/').to_string(),
                timeout_secs: parse_or(
                    "INFERENCE_TIMEOUT_SECS",
                    get("INFERENCE_TIMEOUT_SECS"),
                    default_inference_timeout,
                )?,
                connect_timeout_secs: parse_or(
                    "INFERENCE_CONNECT_TIMEOUT_SECS",
                    get("INFERENCE_CONNECT_TIMEOUT_SECS"),
                    default_inference_connect_timeout,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    D: FnOnce() -> T,
{
    match raw {
        None => Ok(default()),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, value)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

//! Server configuration from environment variables.

use std::env;

use thiserror::Error;

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for suggestion requests.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Process configuration, built once at startup and handed to the
/// components that need it. Business logic never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Port to listen on.
    pub port: u16,
    /// Generation provider name: "openai" or "fake".
    pub provider: String,
    /// API key for the generation service; required unless the provider
    /// is "fake".
    pub api_key: Option<String>,
    /// Model name passed to the generation service.
    pub model: String,
    /// Base URL of the generation service.
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`: Postgres connection string
    ///
    /// Optional:
    /// - `PORT`: listen port (default: 3000)
    /// - `TEXTTOPOT_PROVIDER`: "openai" | "fake" (default: "openai")
    /// - `OPENAI_API_KEY`: key for the generation service
    /// - `TEXTTOPOT_MODEL`: model name (default: "gpt-4o-mini")
    /// - `TEXTTOPOT_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let provider = env::var("TEXTTOPOT_PROVIDER").unwrap_or_else(|_| "openai".to_string());

        let api_key = env::var("OPENAI_API_KEY").ok();

        let model = env::var("TEXTTOPOT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("TEXTTOPOT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            database_url,
            port,
            provider,
            api_key,
            model,
            base_url,
        })
    }
}

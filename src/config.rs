//! Environment-sourced runtime configuration.
//!
//! Call `dotenv::dotenv().ok()` before [`Config::from_env`] so a local
//! `.env` file is picked up, the same as any other environment variable.

use std::path::PathBuf;
use thiserror::Error;

/// Errors detected while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Runtime configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search-provider secret, consumed by the crew execution layer.
    pub serper_api_key: String,
    /// Language-model-provider secret, consumed by the crew execution layer.
    pub openai_api_key: String,
    /// Address to bind the listener to.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origins. `None` allows any origin, without credentials.
    pub cors_origins: Option<Vec<String>>,
    /// Directory the writer agent's directory-read tool points at.
    pub content_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The two provider secrets are required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let serper_api_key = require("SERPER_API_KEY")?;
        let openai_api_key = require("OPENAI_API_KEY")?;

        let bind_addr =
            std::env::var("APP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "APP_PORT",
                value: raw,
            })?,
            Err(_) => 8000,
        };

        let cors_origins = std::env::var("APP_CORS_ORIGINS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let content_dir = std::env::var("APP_CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./blog-posts"));

        Ok(Self {
            serper_api_key,
            openai_api_key,
            bind_addr,
            port,
            cors_origins,
            content_dir,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations don't race other tests in this
    // module.
    #[test]
    fn test_from_env_requires_provider_keys() {
        std::env::remove_var("SERPER_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SERPER_API_KEY")));

        std::env::set_var("SERPER_API_KEY", "serper-test");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("OPENAI_API_KEY")));

        std::env::set_var("OPENAI_API_KEY", "openai-test");
        let config = Config::from_env().unwrap();
        assert_eq!(config.serper_api_key, "serper-test");
        assert_eq!(config.openai_api_key, "openai-test");
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, None);
        assert_eq!(config.content_dir, PathBuf::from("./blog-posts"));

        std::env::remove_var("SERPER_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
    }
}

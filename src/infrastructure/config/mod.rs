use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::repositories::sarvam_repository::DEFAULT_SARVAM_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Sarvam API
    pub sarvam_api_key: String,
    pub sarvam_base_url: String,
    /// Zero disables the timeout on outbound calls
    pub upstream_timeout_secs: u64,
    // Front-end assets
    pub static_dir: PathBuf,
    pub frontend_dev_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()?,
            environment: match var("ENVIRONMENT").as_deref() {
                Some("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match var("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            sarvam_api_key: var("SARVAM_API_KEY").unwrap_or_default(),
            sarvam_base_url: var("SARVAM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SARVAM_BASE_URL.to_string()),
            upstream_timeout_secs: var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()?,
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| "dist".to_string())
                .into(),
            frontend_dev_url: var("FRONTEND_DEV_URL")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn has_api_key(&self) -> bool {
        !self.sarvam_api_key.is_empty()
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        match self.upstream_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

use once_cell::sync::Lazy;
use std::env;
use url::Url;

use crate::error::ApiError;

/// Base URL of the hosted HR dashboard API.
const DEFAULT_API_URL: &str = "https://hr-dashboard-app-project.et.r.appspot.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Remote API origin, overridable via HRDASH_API_URL.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("HRDASH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("HRDASH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
            },
        }
    }
}

impl ApiConfig {
    /// Parse and validate the configured base URL.
    pub fn base(&self) -> Result<Url, ApiError> {
        Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid API base URL '{}': {}", self.base_url, e)))
    }
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration accessor.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

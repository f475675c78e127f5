use std::env;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Environment variable selecting the backing service.
pub const BASE_URL_ENV: &str = "FOOD2MOOD_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "auth_token";

/// Settings for the HTTP client wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_key: TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        if let Some(url) = base_url {
            let url = url.trim().to_string();
            if url.is_empty() {
                return Err(AppError::Config("base URL must not be empty".to_string()));
            }
            self.base_url = url;
        }

        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(AppError::Config("timeout must be at least 1 second".to_string()));
            }
            self.timeout = Duration::from_secs(secs);
        }

        Ok(self)
    }

    /// Join the base URL and an absolute API path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.token_key, "auth_token");
    }

    #[test]
    fn test_env_override() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://api.food2mood.ru".to_string())
        });
        assert_eq!(config.base_url, "https://api.food2mood.ru");
    }

    #[test]
    fn test_blank_env_falls_back() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_overrides() {
        let config = ClientConfig::default()
            .with_overrides(Some("http://10.0.0.5:9000".to_string()), Some(3))
            .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));

        assert!(ClientConfig::default().with_overrides(None, Some(0)).is_err());
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let config = ClientConfig::default()
            .with_overrides(Some("http://localhost:8000/".to_string()), None)
            .unwrap();
        assert_eq!(config.url_for("/health"), "http://localhost:8000/health");
    }
}

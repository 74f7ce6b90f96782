use reqwest::Url;
use thiserror::Error;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the accounts service base URL.
pub const BASE_URL_ENV: &str = "ACCOUNTS_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Where the accounts service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`
    pub base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `ACCOUNTS_API_URL`, after loading a `.env` file if one exists.
    /// Falls back to [`DEFAULT_BASE_URL`] when unset or blank.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = GatewayConfig::new("http://accounts.internal:8000/");
        assert_eq!(config.base_url, "http://accounts.internal:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(GatewayConfig::new("ftp://accounts").validate().is_err());
        assert!(GatewayConfig::new("not a url").validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        std::env::set_var(BASE_URL_ENV, "https://accounts.example.com/");
        let config = GatewayConfig::from_env();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, "https://accounts.example.com");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_blank() {
        std::env::set_var(BASE_URL_ENV, "  ");
        let config = GatewayConfig::from_env();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config, GatewayConfig::default());
    }
}

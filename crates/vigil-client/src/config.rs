//! Backend API client configuration.
//!
//! Defaults point to a local backend on port 8000. Override via
//! environment variables or explicit construction for staging/testing.

use url::Url;

/// Configuration for connecting to the compliance backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (default: `http://localhost:8000`).
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `VIGIL_API_URL` (default: `http://localhost:8000`)
    /// - `VIGIL_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("VIGIL_API_URL", "http://localhost:8000")?,
            timeout_secs: std::env::var("VIGIL_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Configuration pointing at an explicit base URL (used by tests
    /// against mock servers).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the string is not a valid URL.
    pub fn at(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl("base_url".to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL value failed to parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_builds_valid_config() {
        let cfg = ApiConfig::at("http://127.0.0.1:9000").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VIGIL_VAR", "http://localhost:8000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn at_rejects_invalid_url() {
        assert!(ApiConfig::at("not a url").is_err());
    }
}

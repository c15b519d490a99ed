// Client Configuration
//
// Base URL comes from the environment, everything else is fixed: the backend
// contract pins a 30 second request timeout and JSON as the default
// content type.

use std::env;
use std::time::Duration;

/// Fallback when `DOCEXTRACT_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, stored without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read `DOCEXTRACT_BASE_URL`, falling back to the default
    pub fn from_env() -> Self {
        match env::var("DOCEXTRACT_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}

//! Engine configuration.
//!
//! Built once at startup and passed explicitly into the engine; nothing here
//! is ambient global state.

use std::time::Duration;

/// Read-only configuration for a page engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Root URL of the content service, without a trailing slash
    pub base_url: String,

    /// Language shown in the left column and the page header when the
    /// request carries no `main` parameter
    pub default_main: String,

    /// Language shown in the right column when the request carries no
    /// `second` parameter
    pub default_second: String,

    /// Per-request timeout for content-service calls
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5050".to_string(),
            default_main: "por".to_string(),
            default_second: "fra".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    /// Build a configuration from the environment, falling back to defaults.
    ///
    /// Honors `BIVERSE_BASE_URL`, `BIVERSE_MAIN_LANG` and
    /// `BIVERSE_SECOND_LANG`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("BIVERSE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            default_main: std::env::var("BIVERSE_MAIN_LANG").unwrap_or(defaults.default_main),
            default_second: std::env::var("BIVERSE_SECOND_LANG")
                .unwrap_or(defaults.default_second),
            request_timeout: defaults.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.base_url, "http://localhost:5050");
        assert_eq!(config.default_main, "por");
        assert_eq!(config.default_second, "fra");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}

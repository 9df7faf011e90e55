//! Search client configuration
//!
//! Holds the endpoint location, the fixed query parameters sent with every
//! search and the tuning of the underlying HTTP connection pool. The defaults
//! reproduce the behaviour of the public biliintl mobile app search.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Host serving the biliintl app gateway
pub const DEFAULT_BASE_URL: &str = "https://app.biliintl.com";

/// Locale requested when none is configured
pub const DEFAULT_LOCALE: &str = "en_US";

/// Path of the typed search endpoint, relative to the base URL
pub const SEARCH_PATH: &str = "/intl/gateway/v2/app/search/type";

/// Errors that can occur while validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A timeout of zero would fail every request immediately
    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Configuration for [`crate::BiliIntlProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Scheme and host of the API gateway, without trailing path
    pub base_url: String,
    /// Value of the `platform` query parameter
    pub platform: String,
    /// Value of the `s_locale` query parameter
    pub locale: String,
    /// Value of the `type` query parameter (7 selects anime seasons)
    pub result_type: u32,
    /// Whether the server should wrap matches in highlight markup
    pub highlight: bool,
    /// Total time allowed for a single request, including the body
    pub timeout: Duration,
    /// Maximum number of idle connections kept per host
    pub max_idle_per_host: usize,
    /// How long an idle connection stays in the pool
    pub idle_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            platform: "app".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            result_type: 7,
            highlight: false,
            timeout: Duration::from_secs(10),
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(30),
        }
    }
}

impl SearchConfig {
    /// Checks the configuration and returns the parsed search endpoint
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        Url::parse(&endpoint).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }
}
